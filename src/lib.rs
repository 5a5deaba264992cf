//! Torus Hunt - ships, bullets and food on a wrapping 2D arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, toroidal bounds, collisions, interactions)
//! - `input`: Keyboard plumbing (key transitions folded into per-tick intent flags)
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod sim;
pub mod tuning;

pub use input::{InputState, Key};
pub use tuning::{BulletTuning, FoodTuning, ShipTuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation step rate for real-time hosts (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum catch-up steps per frame to prevent spiral of death
    pub const MAX_STEPS_PER_FRAME: u32 = 8;

    /// Arena dimensions
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;
}

/// Rotate a vector by a signed angle in radians (counter-clockwise positive)
#[inline]
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    Vec2::from_angle(radians).rotate(v)
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
