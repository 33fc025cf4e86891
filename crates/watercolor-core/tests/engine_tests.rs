// Frame loop: ageing, culling, capping and ordering.

mod common;

use common::*;
use glam::Vec2;
use watercolor_core::*;

fn fixed_life(frames: u32) -> ParticleConfig {
    let mut config = ParticleConfig::default().blobs_only();
    config.blob.max_age = AgeRange::fixed(frames);
    config
}

#[test]
fn particle_with_max_age_50_lives_through_age_49() {
    let mut engine = engine_with(fixed_life(50), 11);
    let mut surface = RecordingSurface::new(800.0, 600.0);

    let stats = stroke(&mut engine, &mut surface, (0.0, 0.0), (10.0, 0.0));
    assert_eq!(stats.spawned, 3);
    assert!(engine.particles().iter().all(|p| p.age == 1));

    let stats = run_idle(&mut engine, &mut surface, 48);
    assert!(engine.particles().iter().all(|p| p.age == 49));
    assert_eq!(engine.len(), 3);
    assert_eq!(stats.last().map(|s| s.drawn), Some(3));

    let stats = engine.frame(&mut surface);
    assert_eq!(stats.drawn, 0);
    assert_eq!(stats.expired, 3);
    assert!(engine.is_empty());
}

#[test]
fn drawn_iff_alive_every_frame() {
    let mut config = ParticleConfig::default();
    config.blob.max_age = AgeRange::new(5, 40);
    config.vapor.max_age = AgeRange::new(3, 20);
    let mut engine = engine_with(config, 12);
    let mut surface = RecordingSurface::new(400.0, 400.0);
    let mut walker = seeded(99);

    for frame in 0..300 {
        if frame % 3 == 0 {
            use rand::Rng;
            engine.pointer_moved(walker.gen_range(0.0..400.0), walker.gen_range(0.0..400.0));
        }
        let before = engine.len();
        let stats = engine.frame(&mut surface);
        assert_eq!(stats.drawn + stats.expired, before + stats.spawned);
        assert_eq!(stats.live + stats.evicted, stats.drawn + stats.shed);
        for p in engine.particles() {
            assert!(p.age <= p.max_age);
            if p.age > 0 {
                assert!(p.is_alive(), "expired particle retained: {p:?}");
            }
        }
    }
}

#[test]
fn cap_evicts_oldest_first() {
    let mut config = fixed_life(1_000);
    config.cap = 4;
    config.spawn.max_per_event = 4;
    let mut engine = engine_with(config, 13);
    let mut surface = RecordingSurface::new(800.0, 600.0);

    let first = stroke(&mut engine, &mut surface, (0.0, 0.0), (100.0, 0.0));
    assert_eq!(first.spawned, 4);
    assert_eq!(engine.len(), 4);

    engine.pointer_moved(200.0, 0.0);
    let second = engine.frame(&mut surface);
    assert_eq!(second.spawned, 4);
    assert_eq!(second.evicted, 4);
    assert_eq!(engine.len(), 4);
    // Only the newest batch survives.
    assert!(engine.particles().iter().all(|p| p.age == 1));
}

#[test]
fn list_never_exceeds_cap() {
    let mut config = ParticleConfig::default();
    config.cap = 25;
    let mut engine = engine_with(config, 14);
    let mut surface = RecordingSurface::new(500.0, 500.0);

    for i in 0..400 {
        let t = i as f32 * 0.1;
        engine.pointer_moved(250.0 + 200.0 * t.cos(), 250.0 + 200.0 * t.sin());
        let stats = engine.frame(&mut surface);
        assert!(stats.live <= 25);
        assert!(engine.len() <= 25);
        let ages: Vec<u32> = engine.particles().iter().map(|p| p.age).collect();
        assert!(
            ages.windows(2).all(|w| w[0] >= w[1]),
            "list must stay oldest-first: {ages:?}"
        );
    }
}

#[test]
fn fresh_engine_stays_empty_without_input() {
    let mut engine = engine_with(ParticleConfig::default(), 15);
    let mut surface = RecordingSurface::new(300.0, 300.0);
    let stats = run_idle(&mut engine, &mut surface, 200);
    assert!(engine.is_empty());
    assert!(stats.iter().all(|s| s.spawned == 0 && s.drawn == 0));
}

#[test]
fn all_particles_expire_within_200_idle_frames() {
    let mut config = ParticleConfig::default();
    config.blob.max_age = AgeRange::new(30, 80);
    config.vapor.max_age = AgeRange::new(20, 60);
    config.shedding.chance = 0.5;
    let mut engine = engine_with(config, 16);
    let mut surface = RecordingSurface::new(300.0, 300.0);

    for x in (0..300).step_by(30) {
        engine.pointer_moved(x as f32, 150.0);
        engine.frame(&mut surface);
    }
    assert!(!engine.is_empty());

    let stats = run_idle(&mut engine, &mut surface, 200);
    assert!(engine.is_empty());
    assert!(stats.iter().all(|s| s.spawned == 0));
    assert_eq!(stats.last().map(|s| s.live), Some(0));
}

#[test]
fn trail_fill_precedes_particle_paint() {
    let mut engine = engine_with(fixed_life(100), 17);
    let mut surface = RecordingSurface::new(320.0, 240.0);
    stroke(&mut engine, &mut surface, (10.0, 10.0), (60.0, 10.0));
    surface.clear();

    engine.frame(&mut surface);
    assert_eq!(
        surface.ops.first(),
        Some(&Op::FillRect(engine.config().trail))
    );
    let rects = surface
        .ops
        .iter()
        .filter(|op| matches!(op, Op::FillRect(_)))
        .count();
    assert_eq!(rects, 1);
}

#[test]
fn particles_are_painted_in_insertion_order() {
    let mut config = fixed_life(100);
    config.render.glow = false;
    let mut engine = engine_with(config, 18);
    let mut surface = RecordingSurface::new(320.0, 240.0);
    stroke(&mut engine, &mut surface, (0.0, 0.0), (100.0, 0.0));
    surface.clear();

    engine.frame(&mut surface);
    let translated: Vec<Vec2> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Translate(at) => Some(*at),
            _ => None,
        })
        .collect();
    let positions: Vec<Vec2> = engine.particles().iter().map(|p| p.position).collect();
    assert_eq!(translated, positions);
}

#[test]
fn motion_follows_damped_velocity() {
    let mut engine = engine_with(fixed_life(100), 19);
    let mut surface = RecordingSurface::new(320.0, 240.0);
    stroke(&mut engine, &mut surface, (0.0, 0.0), (30.0, 0.0));

    let before = engine.particles()[0].clone();
    engine.frame(&mut surface);
    let after = &engine.particles()[0];
    let tuning = &engine.config().blob;

    assert_eq!(after.age, before.age + 1);
    assert_eq!(after.position, before.position + before.velocity);
    assert_eq!(after.velocity.x, before.velocity.x * tuning.damping.0);
    assert_eq!(after.velocity.y, before.velocity.y * tuning.damping.1);
    assert_eq!(after.rotation, before.rotation + before.rotation_speed);
    assert_eq!(after.size, before.size + tuning.growth);
    assert!(after.velocity.length() < before.velocity.length());
    assert_eq!(after.color, before.color);
    assert_eq!(after.alpha, before.alpha);
}

#[test]
fn same_seed_gives_same_trajectories() {
    let run = |seed| {
        let mut engine = engine_with(ParticleConfig::default(), seed);
        let mut surface = RecordingSurface::new(640.0, 480.0);
        for i in 0..60 {
            engine.pointer_moved(i as f32 * 7.0, 200.0 + (i % 5) as f32 * 3.0);
            engine.frame(&mut surface);
        }
        engine.particles().to_vec()
    };
    assert_eq!(run(20), run(20));
    assert_ne!(run(20), run(21));
}

#[test]
fn engines_do_not_share_state() {
    let mut a = engine_with(fixed_life(100), 22);
    let mut b = engine_with(fixed_life(100), 22);
    let mut sa = RecordingSurface::new(100.0, 100.0);
    let mut sb = RecordingSurface::new(100.0, 100.0);

    stroke(&mut a, &mut sa, (0.0, 0.0), (50.0, 50.0));
    b.frame(&mut sb);
    assert!(!a.is_empty());
    assert!(b.is_empty());
}

#[test]
fn pointer_leave_parks_cursor_at_center() {
    let mut engine = engine_with(fixed_life(100), 23);
    let mut surface = RecordingSurface::new(400.0, 200.0);
    engine.pointer_moved(10.0, 10.0);
    engine.frame(&mut surface);

    engine.pointer_left();
    assert_eq!(engine.cursor().position, Vec2::new(200.0, 100.0));
    assert!(!engine.cursor().moved);

    // Re-entry at a corner anchors instead of streaking from the center.
    engine.pointer_moved(0.0, 0.0);
    assert_eq!(engine.frame(&mut surface).spawned, 0);
}

#[test]
fn resize_is_last_write_wins() {
    let mut engine = engine_with(ParticleConfig::default(), 24);
    engine.resize(100.0, 50.0);
    engine.resize(300.0, 150.0);
    assert_eq!(engine.surface_size(), Vec2::new(300.0, 150.0));

    let mut surface = RecordingSurface::new(640.0, 480.0);
    engine.frame(&mut surface);
    assert_eq!(engine.surface_size(), Vec2::new(640.0, 480.0));
}

#[test]
fn invalid_config_is_rejected() {
    let config = ParticleConfig {
        cap: 0,
        ..ParticleConfig::default()
    };
    assert_eq!(
        ParticleEngine::new(config, seeded(0)).err(),
        Some(ConfigError::ZeroCap)
    );
}
