//! Toroidal arena bounds
//!
//! A rectangular field where leaving one edge re-enters from the opposite
//! edge. The wrap is a single edge-step per axis, not a modulo: it assumes a
//! per-tick displacement never exceeds the arena extent. A coordinate that
//! outruns the wrap is logged and left out of bounds for that tick.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The rectangular play field, spanning `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Center of the field (the player's spawn point)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Change the field size. Every wrap from now on uses the new extents;
    /// entities already outside them drift back in through the next wrap.
    pub fn resize(&mut self, width: f32, height: f32) {
        debug_assert!(width > 0.0 && height > 0.0);
        self.width = width;
        self.height = height;
    }

    /// Wrap a position back onto the field, one edge-step per axis
    pub fn wrap(&self, p: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(p.x, self.width), wrap_axis(p.y, self.height))
    }

    /// Shortest offset from `from` to `to` across the wrapping field.
    /// Each component lies in `[-extent/2, extent/2]`.
    pub fn torus_delta(&self, from: Vec2, to: Vec2) -> Vec2 {
        Vec2::new(
            axis_delta(from.x, to.x, self.width),
            axis_delta(from.y, to.y, self.height),
        )
    }

    /// Uniform random position on the field
    pub fn random_position(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random_range(0.0..self.width),
            rng.random_range(0.0..self.height),
        )
    }
}

/// Single-step wrap of one coordinate into `[0, extent]`
fn wrap_axis(value: f32, extent: f32) -> f32 {
    let wrapped = if value < 0.0 {
        value + extent
    } else if value > extent {
        value - extent
    } else {
        value
    };
    if !(0.0..=extent).contains(&wrapped) {
        log::warn!("wrap: {value} outruns a single edge-step (extent {extent}), left out of bounds");
    }
    wrapped
}

fn axis_delta(from: f32, to: f32, extent: f32) -> f32 {
    let mut delta = to - from;
    let half = extent / 2.0;
    if delta > half {
        delta -= extent;
    } else if delta < -half {
        delta += extent;
    }
    delta
}
