//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use torus_hunt::sim::{Arena, Body, Intents, World, WorldConfig, circles_overlap, tick};
use torus_hunt::{ShipTuning, normalize_angle};

/// Decode one tick's worth of intent flags from a byte
fn intents_from_bits(bits: u8) -> Intents {
    Intents {
        turn_left: bits & 0x01 != 0,
        turn_right: bits & 0x02 != 0,
        thrust_forward: bits & 0x04 != 0,
        thrust_backward: bits & 0x08 != 0,
        fire: bits & 0x10 != 0,
    }
}

proptest! {
    /// Any displacement smaller than the arena extent wraps back onto the
    /// field in a single step.
    #[test]
    fn wrap_contains_single_tick_displacement(
        px in 0.0f32..800.0,
        py in 0.0f32..600.0,
        dx in -799.0f32..799.0,
        dy in -599.0f32..599.0,
    ) {
        let arena = Arena::new(800.0, 600.0);
        let wrapped = arena.wrap(Vec2::new(px + dx, py + dy));
        prop_assert!((0.0..=800.0).contains(&wrapped.x));
        prop_assert!((0.0..=600.0).contains(&wrapped.y));
    }

    /// The shortest wrapped offset never exceeds half the arena extent.
    #[test]
    fn torus_delta_is_at_most_half_the_extent(
        fx in 0.0f32..800.0,
        fy in 0.0f32..600.0,
        tx in 0.0f32..800.0,
        ty in 0.0f32..600.0,
    ) {
        let arena = Arena::new(800.0, 600.0);
        let delta = arena.torus_delta(Vec2::new(fx, fy), Vec2::new(tx, ty));
        prop_assert!(delta.x.abs() <= 400.0);
        prop_assert!(delta.y.abs() <= 300.0);
    }

    /// Turning changes the heading by exactly the turn rate per tick and
    /// keeps the facing unit length.
    #[test]
    fn turn_is_exact_and_unit(heading in -3.0f32..3.0, steps in 1usize..50) {
        let arena = Arena::new(800.0, 600.0);
        let tuning = ShipTuning::default();
        let mut body = Body::new(Vec2::new(400.0, 300.0), heading);
        let intents = Intents { turn_left: true, ..Intents::default() };
        for _ in 0..steps {
            let before = body.dir.to_angle();
            body.step(&intents, &tuning, &arena);
            let delta = normalize_angle(body.dir.to_angle() - before);
            prop_assert!((delta - tuning.max_turn).abs() < 1e-4);
            prop_assert!((body.dir.length() - 1.0).abs() < 1e-4);
        }
    }

    /// A coasting body strictly slows until it parks, and never reverses.
    #[test]
    fn friction_decays_speed_to_zero(vx in -5.0f32..5.0, vy in -5.0f32..5.0) {
        let arena = Arena::new(800.0, 600.0);
        let tuning = ShipTuning::default();
        let mut body = Body::new(Vec2::new(400.0, 300.0), 0.0);
        body.vel = Vec2::new(vx, vy);
        let idle = Intents::default();

        let mut speed = body.vel.length();
        for _ in 0..1000 {
            body.step(&idle, &tuning, &arena);
            let next = body.vel.length();
            prop_assert!(next < speed || next == 0.0);
            speed = next;
        }
        prop_assert_eq!(speed, 0.0);
    }

    /// Overlap does not care which circle is asked.
    #[test]
    fn overlap_is_symmetric(
        ax in 0.0f32..100.0, ay in 0.0f32..100.0, ar in 0.0f32..30.0,
        bx in 0.0f32..100.0, by in 0.0f32..100.0, br in 0.0f32..30.0,
    ) {
        prop_assert_eq!(
            circles_overlap(Vec2::new(ax, ay), ar, Vec2::new(bx, by), br),
            circles_overlap(Vec2::new(bx, by), br, Vec2::new(ax, ay), ar)
        );
    }

    /// Two worlds with the same seed replay the same run for any input
    /// script.
    #[test]
    fn same_seed_same_story(
        seed in any::<u64>(),
        script in prop::collection::vec(any::<u8>(), 1..60),
    ) {
        let cfg = WorldConfig { seed, ..WorldConfig::default() };
        let mut a = World::new(&cfg).unwrap();
        let mut b = World::new(&cfg).unwrap();

        for bits in &script {
            let intents = intents_from_bits(*bits);
            tick(&mut a, &intents);
            tick(&mut b, &intents);
        }

        prop_assert_eq!(&a.player, &b.player);
        prop_assert_eq!(&a.bullets, &b.bullets);
        prop_assert_eq!(a.food, b.food);
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            prop_assert_eq!(ea.body, eb.body);
            prop_assert_eq!(ea.energy, eb.energy);
        }
    }

    /// Ships on a default world never escape the field, whatever the pilot
    /// does.
    #[test]
    fn player_stays_on_the_field(script in prop::collection::vec(any::<u8>(), 1..120)) {
        let cfg = WorldConfig::default();
        let mut world = World::new(&cfg).unwrap();
        for bits in &script {
            tick(&mut world, &intents_from_bits(*bits));
            let pos = world.player.body.pos;
            prop_assert!((0.0..=cfg.width).contains(&pos.x));
            prop_assert!((0.0..=cfg.height).contains(&pos.y));
        }
    }
}
