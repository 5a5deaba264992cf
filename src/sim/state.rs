//! World state and core simulation types
//!
//! Every store the game needs lives here, and the `World` is the composition
//! root that builds and wires them. Cross-store effects only flow through
//! the published operations, so each interaction has one auditable path.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Arena;
use super::collision::circles_overlap;
use super::motion::{Body, Intents};
use super::policy::{DecisionPolicy, Observation, PolicyError, PolicyKind, build_policy};
use crate::consts::*;
use crate::tuning::{BulletTuning, FoodTuning, ShipTuning};

/// Health every player starts with
pub const PLAYER_START_HEALTH: u32 = 100;

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Collision radius
    pub radius: f32,
    pub health: u32,
    /// Food energy eaten so far
    pub energy: u32,
}

impl Player {
    pub fn new(pos: Vec2, heading: f32, tuning: &ShipTuning) -> Self {
        Self {
            body: Body::new(pos, heading),
            radius: tuning.radius,
            health: PLAYER_START_HEALTH,
            energy: 0,
        }
    }

    /// Published damage operation; health floors at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Does a circle at `pos` with `radius` overlap this ship?
    pub fn in_area(&self, pos: Vec2, radius: f32) -> bool {
        circles_overlap(self.body.pos, self.radius, pos, radius)
    }
}

/// An enemy ship. Same physics as the player; steering is injected.
#[derive(Debug)]
pub struct Enemy {
    pub body: Body,
    /// Collision radius
    pub radius: f32,
    /// Food energy eaten so far
    pub energy: u32,
    policy: Box<dyn DecisionPolicy>,
}

impl Enemy {
    pub fn new(
        pos: Vec2,
        heading: f32,
        tuning: &ShipTuning,
        policy: Box<dyn DecisionPolicy>,
    ) -> Self {
        Self {
            body: Body::new(pos, heading),
            radius: tuning.radius,
            energy: 0,
            policy,
        }
    }

    /// Ask the injected policy for this tick's intents
    pub fn decide(&mut self, obs: &Observation) -> Intents {
        self.policy.decide(obs)
    }

    pub fn in_area(&self, pos: Vec2, radius: f32) -> bool {
        circles_overlap(self.body.pos, self.radius, pos, radius)
    }
}

/// A bullet in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Facing at fire time, kept for rendering
    pub dir: Vec2,
    pub vel: Vec2,
    pub damage: u32,
    pub radius: f32,
    /// Remaining ticks before removal
    pub life_ticks: u32,
}

impl Bullet {
    /// Spawn from a shooter: muzzle at the wrapped nose point, shooter's
    /// velocity inherited plus muzzle speed along the facing
    pub fn spawn(shooter: &Body, nose_offset: f32, tuning: &BulletTuning, arena: &Arena) -> Self {
        Self {
            pos: arena.wrap(shooter.nose(nose_offset)),
            dir: shooter.dir,
            vel: shooter.vel + shooter.dir * tuning.speed,
            damage: tuning.damage,
            radius: tuning.radius,
            life_ticks: tuning.life_ticks,
        }
    }

    /// Wrap-aware straight-line flight; no turning, no friction
    pub fn advance(&mut self, arena: &Arena) {
        self.pos = arena.wrap(self.pos + self.vel);
        self.life_ticks = self.life_ticks.saturating_sub(1);
    }

    pub fn live(&self) -> bool {
        self.life_ticks > 0
    }
}

/// The single food pickup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub pos: Vec2,
    /// Collision radius
    pub radius: f32,
    /// Energy granted on consumption
    pub energy: u32,
}

impl Food {
    pub fn new(pos: Vec2, tuning: &FoodTuning) -> Self {
        Self {
            pos,
            radius: tuning.radius,
            energy: tuning.energy,
        }
    }

    pub fn in_area(&self, pos: Vec2, radius: f32) -> bool {
        circles_overlap(self.pos, self.radius, pos, radius)
    }

    /// Published relocation operation
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}

/// Construction parameters for a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    /// How many enemy ships to spawn
    pub enemy_count: usize,
    /// Steering built for every enemy
    pub enemy_policy: PolicyKind,
    /// Run seed for reproducibility
    pub seed: u64,
    pub player: ShipTuning,
    pub enemy: ShipTuning,
    pub bullet: BulletTuning,
    pub food: FoodTuning,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
            enemy_count: 1,
            enemy_policy: PolicyKind::default(),
            seed: 0,
            player: ShipTuning::default(),
            enemy: ShipTuning::default(),
            bullet: BulletTuning::default(),
            food: FoodTuning::default(),
        }
    }
}

/// Complete simulation state (deterministic for a given seed)
#[derive(Debug)]
pub struct World {
    /// The wrapping play field
    pub arena: Arena,
    /// The keyboard-driven ship
    pub player: Player,
    /// Policy-driven ships
    pub enemies: Vec<Enemy>,
    /// Bullets in flight, oldest first
    pub bullets: Vec<Bullet>,
    /// The one food pickup
    pub food: Food,
    /// The construction parameters, kept for tuning lookups
    pub cfg: WorldConfig,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl World {
    /// Build every store and wire them together. Fails when the configured
    /// enemy policy cannot be built; there is no silent fallback.
    pub fn new(cfg: &WorldConfig) -> Result<Self, PolicyError> {
        let arena = Arena::new(cfg.width, cfg.height);
        let mut rng = Pcg32::seed_from_u64(cfg.seed);

        // The player spawns at the center facing up.
        let player = Player::new(arena.center(), FRAC_PI_2, &cfg.player);

        let mut enemies = Vec::with_capacity(cfg.enemy_count);
        for _ in 0..cfg.enemy_count {
            let pos = arena.random_position(&mut rng);
            let heading = rng.random_range(0.0..TAU);
            let policy = build_policy(cfg.enemy_policy)?;
            enemies.push(Enemy::new(pos, heading, &cfg.enemy, policy));
        }

        let food = Food::new(arena.random_position(&mut rng), &cfg.food);

        Ok(Self {
            arena,
            player,
            enemies,
            bullets: Vec::new(),
            food,
            cfg: cfg.clone(),
            time_ticks: 0,
            rng,
        })
    }

    /// Change the arena size mid-run. Wrapping follows immediately; nothing
    /// is teleported.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::info!("arena resized to {width}x{height}");
        self.arena.resize(width, height);
    }

    /// Bullet-vs-player resolution: damage the player and report whether
    /// the bullet connected. The caller removes a consumed bullet.
    pub fn resolve_bullet_hit(&mut self, bullet: &Bullet) -> bool {
        let hit = self.player.in_area(bullet.pos, bullet.radius);
        if hit {
            self.player.take_damage(bullet.damage);
            log::debug!(
                "bullet hit player for {}, health now {}",
                bullet.damage,
                self.player.health
            );
        }
        hit
    }

    /// Collider-vs-food resolution: returns the energy transferred (zero on
    /// a miss) and relocates the food when it was eaten.
    pub fn resolve_food_pickup(&mut self, pos: Vec2, radius: f32) -> u32 {
        if !self.food.in_area(pos, radius) {
            return 0;
        }
        let relocated = self.arena.random_position(&mut self.rng);
        log::debug!("food eaten at {}, respawned at {relocated}", self.food.pos);
        self.food.set_position(relocated);
        self.food.energy
    }
}
