//! Data-driven game balance
//!
//! The simulation advances in fixed ticks, so every rate here is per tick,
//! not per second. Hosts that change the tick rate change the game speed.

use serde::{Deserialize, Serialize};

/// Handling numbers shared by every steerable ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipTuning {
    /// Velocity gained per tick along the facing while thrust is held
    pub acceleration: f32,
    /// Heading change per tick while a turn is held (radians)
    pub max_turn: f32,
    /// Speed shed per tick; clamps to a dead stop, never reverses
    pub friction: f32,
    /// Hull scale: render size, and the forward offset of the bullet muzzle
    pub scale: f32,
    /// Collision radius
    pub radius: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            acceleration: 0.1,
            max_turn: 0.1,
            friction: 0.02,
            scale: 20.0,
            radius: 10.0,
        }
    }
}

/// Bullet numbers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletTuning {
    /// Muzzle speed along the shooter's facing (the shooter's own velocity
    /// is inherited on top)
    pub speed: f32,
    /// Health removed from the player on a hit
    pub damage: u32,
    /// Collision radius
    pub radius: f32,
    /// Ticks in flight before the bullet is removed, hit or not
    pub life_ticks: u32,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: 5.0,
            damage: 25,
            radius: 2.0,
            life_ticks: 180,
        }
    }
}

/// Food pickup numbers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodTuning {
    /// Collision radius
    pub radius: f32,
    /// Energy granted to whichever ship eats it
    pub energy: u32,
}

impl Default for FoodTuning {
    fn default() -> Self {
        Self {
            radius: 5.0,
            energy: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let ship = ShipTuning::default();
        assert!(ship.acceleration > 0.0);
        assert!(ship.friction < ship.acceleration);
        assert!(ship.max_turn > 0.0);
        assert!(ship.radius > 0.0);

        let bullet = BulletTuning::default();
        assert!(bullet.speed > 0.0);
        assert!(bullet.life_ticks > 0);

        let food = FoodTuning::default();
        assert!(food.energy > 0);
    }

    #[test]
    fn test_tuning_round_trips_through_json() {
        let ship = ShipTuning {
            acceleration: 0.25,
            ..ShipTuning::default()
        };
        let json = serde_json::to_string(&ship).unwrap();
        let back: ShipTuning = serde_json::from_str(&json).unwrap();
        assert_eq!(ship, back);
    }
}
