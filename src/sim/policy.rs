//! Enemy steering policies
//!
//! Each enemy is handed what it can see this tick and answers with intent
//! flags, the same flags a keyboard produces for the player. The learned
//! policy the roadmap calls for has no implementation yet; asking for it is
//! a construction error, not a silent stand-in.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion::Intents;

/// What a steering policy sees each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Shortest wrapped offset from the ship to the food
    pub to_food: Vec2,
    /// The ship's facing, unit length
    pub facing: Vec2,
    /// The ship's current speed
    pub speed: f32,
}

/// Per-tick steering: observable state in, intent flags out
pub trait DecisionPolicy: fmt::Debug {
    fn decide(&mut self, obs: &Observation) -> Intents;
}

/// Holds course: never turns, thrusts or fires
#[derive(Debug, Clone, Copy, Default)]
pub struct Drift;

impl DecisionPolicy for Drift {
    fn decide(&mut self, _obs: &Observation) -> Intents {
        Intents::default()
    }
}

/// Which steering policy to build for each enemy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyKind {
    /// The hold-course placeholder
    #[default]
    Drift,
    /// Learned steering; declared but not implemented
    Neural,
}

/// Failure to assemble a steering policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyError {
    NeuralUnimplemented,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeuralUnimplemented => {
                write!(f, "neural steering policy is not implemented")
            }
        }
    }
}

impl std::error::Error for PolicyError {}

/// Build the steering policy for one enemy
pub fn build_policy(kind: PolicyKind) -> Result<Box<dyn DecisionPolicy>, PolicyError> {
    match kind {
        PolicyKind::Drift => Ok(Box::new(Drift)),
        PolicyKind::Neural => Err(PolicyError::NeuralUnimplemented),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation() -> Observation {
        Observation {
            to_food: Vec2::new(10.0, -4.0),
            facing: Vec2::X,
            speed: 0.0,
        }
    }

    #[test]
    fn test_drift_never_acts() {
        let mut policy = Drift;
        let intents = policy.decide(&observation());
        assert_eq!(intents, Intents::default());
        assert!(!intents.fire);
    }

    #[test]
    fn test_build_drift_policy() {
        let mut policy = build_policy(PolicyKind::Drift).unwrap();
        assert_eq!(policy.decide(&observation()), Intents::default());
    }

    #[test]
    fn test_neural_policy_refuses_to_build() {
        let err = build_policy(PolicyKind::Neural).unwrap_err();
        assert_eq!(err, PolicyError::NeuralUnimplemented);
        assert!(err.to_string().contains("not implemented"));
    }
}
