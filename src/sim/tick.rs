//! Fixed-step simulation tick
//!
//! One call advances the world by exactly one step. Hosts own the pacing:
//! a real-time host accumulates elapsed time and calls this at the tick
//! rate, a test calls it directly, and nothing in here touches a clock.

use super::motion::Intents;
use super::policy::Observation;
use super::state::{Bullet, World};

/// Advance the world by one tick.
///
/// `input` carries the player's intent flags for this tick; enemy intents
/// come from their injected policies. Movement settles first, then the
/// interaction resolver runs on the settled positions.
pub fn tick(world: &mut World, input: &Intents) {
    world.time_ticks += 1;

    // Player: steer, move, queue a shot.
    world.player.body.step(input, &world.cfg.player, &world.arena);
    let mut fired: Vec<Bullet> = Vec::new();
    if input.fire {
        fired.push(Bullet::spawn(
            &world.player.body,
            world.cfg.player.scale,
            &world.cfg.bullet,
            &world.arena,
        ));
    }

    // Enemies: observe, decide, move, queue shots.
    let food_pos = world.food.pos;
    for enemy in &mut world.enemies {
        let obs = Observation {
            to_food: world.arena.torus_delta(enemy.body.pos, food_pos),
            facing: enemy.body.dir,
            speed: enemy.body.vel.length(),
        };
        let intents = enemy.decide(&obs);
        enemy.body.step(&intents, &world.cfg.enemy, &world.arena);
        if intents.fire {
            fired.push(Bullet::spawn(
                &enemy.body,
                world.cfg.enemy.scale,
                &world.cfg.bullet,
                &world.arena,
            ));
        }
    }

    // Bullets in flight: straight-line wrap-aware motion, then expiry.
    // This tick's spawns join afterwards, so a fresh bullet holds its
    // muzzle position until the next tick.
    for bullet in &mut world.bullets {
        bullet.advance(&world.arena);
    }
    world.bullets.retain(Bullet::live);
    world.bullets.append(&mut fired);

    // Resolution on settled positions: bullets against the player (a hit
    // consumes the bullet), then the food against every ship in order.
    let mut bullets = std::mem::take(&mut world.bullets);
    bullets.retain(|bullet| !world.resolve_bullet_hit(bullet));
    world.bullets = bullets;

    let eaten = world.resolve_food_pickup(world.player.body.pos, world.player.radius);
    world.player.energy += eaten;
    for i in 0..world.enemies.len() {
        let (pos, radius) = (world.enemies[i].body.pos, world.enemies[i].radius);
        let eaten = world.resolve_food_pickup(pos, radius);
        world.enemies[i].energy += eaten;
    }
}
