//! Keyboard plumbing
//!
//! Hosts feed raw key transitions in; the simulation reads intent flags
//! out. Opposing keys displace each other (pressing Up clears Down), and
//! fire is edge-triggered so holding the key cannot machine-gun: one shot
//! per press, re-armed on release.

use crate::sim::Intents;

/// The five control keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

/// Folds key transitions into per-tick intents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    intents: Intents,
    /// Fire key currently held, to suppress key auto-repeat
    fire_held: bool,
    /// One queued shot, consumed by the next take
    fire_pending: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down transition. Safe to call repeatedly while held.
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => {
                self.intents.thrust_forward = true;
                self.intents.thrust_backward = false;
            }
            Key::Down => {
                self.intents.thrust_backward = true;
                self.intents.thrust_forward = false;
            }
            Key::Left => {
                self.intents.turn_left = true;
                self.intents.turn_right = false;
            }
            Key::Right => {
                self.intents.turn_right = true;
                self.intents.turn_left = false;
            }
            Key::Fire => {
                if !self.fire_held {
                    self.fire_held = true;
                    self.fire_pending = true;
                }
            }
        }
    }

    /// Handle a key-up transition. Releases only that key's own flag, so a
    /// still-held opposing key does not spring back.
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up => self.intents.thrust_forward = false,
            Key::Down => self.intents.thrust_backward = false,
            Key::Left => self.intents.turn_left = false,
            Key::Right => self.intents.turn_right = false,
            Key::Fire => self.fire_held = false,
        }
    }

    /// Intents for the next tick. Held movement keys keep their flags;
    /// the queued shot is one-shot and cleared by this read.
    pub fn take_intents(&mut self) -> Intents {
        let mut intents = self.intents;
        intents.fire = self.fire_pending;
        self.fire_pending = false;
        intents
    }
}
