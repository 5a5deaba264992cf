//! Torus Hunt entry point
//!
//! Headless demo host: a scripted pilot spirals across the arena at the
//! fixed tick rate, firing once a second, with progress logged and a final
//! scene snapshot printed as JSON.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use torus_hunt::consts::{MAX_STEPS_PER_FRAME, TICK_RATE};
use torus_hunt::input::{InputState, Key};
use torus_hunt::sim::{World, WorldConfig, tick};

/// How long the demo flies before printing the snapshot
const DEMO_SECONDS: u32 = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let cfg = WorldConfig {
        seed,
        ..WorldConfig::default()
    };
    let mut world = World::new(&cfg)?;
    log::info!(
        "world ready: {}x{} arena, {} enemies, seed {seed}",
        cfg.width,
        cfg.height,
        cfg.enemy_count
    );

    // Scripted pilot: thrust and turn held for the whole flight.
    let mut input = InputState::new();
    input.key_down(Key::Up);
    input.key_down(Key::Left);

    let step = Duration::from_secs(1) / TICK_RATE;
    let total_ticks = u64::from(DEMO_SECONDS * TICK_RATE);
    let mut accumulator = Duration::ZERO;
    let mut last = Instant::now();

    while world.time_ticks < total_ticks {
        std::thread::sleep(step);

        let now = Instant::now();
        // Cap the frame delta so a stall cannot demand unbounded catch-up.
        accumulator += (now - last).min(Duration::from_millis(100));
        last = now;

        let mut steps = 0;
        while accumulator >= step && steps < MAX_STEPS_PER_FRAME && world.time_ticks < total_ticks
        {
            // One shot at the top of each second.
            if world.time_ticks % u64::from(TICK_RATE) == 0 {
                input.key_down(Key::Fire);
                input.key_up(Key::Fire);
            }
            let intents = input.take_intents();
            tick(&mut world, &intents);
            accumulator -= step;
            steps += 1;

            if world.time_ticks % u64::from(TICK_RATE) == 0 {
                let p = &world.player;
                log::info!(
                    "t={}s pos=({:.1}, {:.1}) speed={:.2} health={} energy={} bullets={}",
                    world.time_ticks / u64::from(TICK_RATE),
                    p.body.pos.x,
                    p.body.pos.y,
                    p.body.vel.length(),
                    p.health,
                    p.energy,
                    world.bullets.len()
                );
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&world.snapshot())?);
    Ok(())
}
