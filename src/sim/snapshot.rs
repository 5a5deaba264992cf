//! Presentation snapshot
//!
//! Renderers get plain value records copied out of the world, never
//! references into live simulation state. Order is stable: player first,
//! then enemies, then bullets, then the food.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::World;

/// Palette for the default renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Green,
    Red,
    White,
    Yellow,
}

/// One visible entity: where it is, which way it points, how big, what color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub position: Vec2,
    pub direction: Vec2,
    pub scale: f32,
    pub color: Color,
}

impl World {
    /// Copy out one sprite per visible entity
    pub fn snapshot(&self) -> Vec<Sprite> {
        let mut sprites = Vec::with_capacity(2 + self.enemies.len() + self.bullets.len());
        sprites.push(Sprite {
            position: self.player.body.pos,
            direction: self.player.body.dir,
            scale: self.cfg.player.scale,
            color: Color::Green,
        });
        for enemy in &self.enemies {
            sprites.push(Sprite {
                position: enemy.body.pos,
                direction: enemy.body.dir,
                scale: self.cfg.enemy.scale,
                color: Color::Red,
            });
        }
        for bullet in &self.bullets {
            sprites.push(Sprite {
                position: bullet.pos,
                direction: bullet.dir,
                scale: bullet.radius * 2.0,
                color: Color::White,
            });
        }
        sprites.push(Sprite {
            position: self.food.pos,
            direction: Vec2::Y,
            scale: self.food.radius * 2.0,
            color: Color::Yellow,
        });
        sprites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, WorldConfig};

    #[test]
    fn test_snapshot_lists_every_entity_in_order() {
        let cfg = WorldConfig {
            enemy_count: 2,
            ..WorldConfig::default()
        };
        let mut world = World::new(&cfg).unwrap();
        world.bullets.push(Bullet {
            pos: Vec2::new(5.0, 5.0),
            dir: Vec2::X,
            vel: Vec2::new(5.0, 0.0),
            damage: 25,
            radius: 2.0,
            life_ticks: 60,
        });

        let sprites = world.snapshot();
        assert_eq!(sprites.len(), 5);
        assert_eq!(sprites[0].color, Color::Green);
        assert_eq!(sprites[1].color, Color::Red);
        assert_eq!(sprites[2].color, Color::Red);
        assert_eq!(sprites[3].color, Color::White);
        assert_eq!(sprites[4].color, Color::Yellow);
    }

    #[test]
    fn test_snapshot_copies_positions_and_facings() {
        let world = World::new(&WorldConfig::default()).unwrap();
        let sprites = world.snapshot();
        assert_eq!(sprites[0].position, world.player.body.pos);
        assert_eq!(sprites[0].direction, world.player.body.dir);
        assert_eq!(sprites[0].scale, world.cfg.player.scale);
        let food = sprites.last().unwrap();
        assert_eq!(food.position, world.food.pos);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let world = World::new(&WorldConfig::default()).unwrap();
        let json = serde_json::to_string(&world.snapshot()).unwrap();
        assert!(json.contains("Green"));
        assert!(json.contains("Yellow"));
    }
}
