//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick stepping only
//! - Seeded RNG only, owned by the world
//! - Stores mutate only through their published operations
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod motion;
pub mod policy;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use bounds::Arena;
pub use collision::circles_overlap;
pub use motion::{Body, Intents};
pub use policy::{DecisionPolicy, Drift, Observation, PolicyError, PolicyKind, build_policy};
pub use snapshot::{Color, Sprite};
pub use state::{Bullet, Enemy, Food, PLAYER_START_HEALTH, Player, World, WorldConfig};
pub use tick::tick;
