//! Per-tick movement for steerable bodies
//!
//! Turn, thrust, friction, move, wrap, in that order. Heading turns at a
//! fixed rate, thrust accelerates along the heading, and friction bleeds
//! speed until the body comes to a dead stop.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Arena;
use crate::rotate;
use crate::tuning::ShipTuning;

/// Action flags consumed over one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust_forward: bool,
    pub thrust_backward: bool,
    /// One-shot: spawn a bullet this tick
    pub fire: bool,
}

impl Intents {
    /// Any movement flag set. Firing alone does not wake a body.
    pub fn any_movement(&self) -> bool {
        self.turn_left || self.turn_right || self.thrust_forward || self.thrust_backward
    }
}

/// Kinematic state of a steerable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing, always unit length
    pub dir: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            dir: Vec2::from_angle(heading),
        }
    }

    /// Forward-offset point used as the bullet muzzle
    pub fn nose(&self, offset: f32) -> Vec2 {
        self.pos + self.dir * offset
    }

    /// Advance one tick: steer, thrust, apply friction, move, wrap.
    ///
    /// A body with no movement intent and zero velocity is at rest and left
    /// untouched. When both keys of a pair are held, left wins over right
    /// and forward wins over backward.
    pub fn step(&mut self, intents: &Intents, tuning: &ShipTuning, arena: &Arena) {
        if intents.turn_left {
            self.dir = rotate(self.dir, tuning.max_turn);
        } else if intents.turn_right {
            self.dir = rotate(self.dir, -tuning.max_turn);
        }

        if intents.thrust_forward {
            self.vel += self.dir * tuning.acceleration;
        } else if intents.thrust_backward {
            self.vel -= self.dir * tuning.acceleration;
        }

        if intents.any_movement() || self.vel != Vec2::ZERO {
            // Friction clamps to a dead stop instead of overshooting into
            // reverse.
            if self.vel.length() <= tuning.friction {
                self.vel = Vec2::ZERO;
            } else {
                self.vel -= self.vel.normalize_or_zero() * tuning.friction;
            }
            self.pos = arena.wrap(self.pos + self.vel);
        }
    }
}
