//! Pointer movement to particle conversion.
//!
//! Particles are laid along the segment between the last spawn point and the
//! current pointer position, one per `step` pixels up to `max_per_event`, so
//! fast strokes do not flood the list.

use crate::config::{ParticleConfig, SpawnConfig};
use crate::cursor::CursorState;
use crate::particle::{Particle, ParticleKind};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// Particles produced by one evaluation; sized for the default tuning
/// (four blobs, their wisps and a splash) without spilling.
pub type SpawnBatch = SmallVec<[Particle; 12]>;

/// Number of trail blobs for a stroke of length `distance`, or zero when the
/// stroke does not exceed the threshold.
#[inline]
pub fn trail_count(distance: f32, spawn: &SpawnConfig) -> usize {
    if distance.is_nan() || distance <= spawn.min_distance {
        return 0;
    }
    let by_distance = (distance / spawn.step).floor() as usize + 1;
    by_distance.min(spawn.max_per_event)
}

#[inline]
fn jitter<R: Rng + ?Sized>(rng: &mut R, width: f32) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * width,
        (rng.gen::<f32>() - 0.5) * width,
    )
}

/// Consume pending pointer movement and emit the particles it is due.
///
/// Movement at or below the threshold leaves `last_spawn` untouched so slow
/// drags accumulate until they cross it.
pub fn evaluate<R: Rng + ?Sized>(
    config: &ParticleConfig,
    cursor: &mut CursorState,
    rng: &mut R,
) -> SpawnBatch {
    let mut batch = SpawnBatch::new();
    if !cursor.moved {
        return batch;
    }
    cursor.moved = false;

    let spawn = &config.spawn;
    let distance = cursor.distance_since_spawn();
    let count = trail_count(distance, spawn);
    if count == 0 {
        return batch;
    }

    let from = cursor.last_spawn;
    let delta = cursor.position - from;
    for i in 0..count {
        let t = i as f32 / count as f32;
        let at = from + delta * t + jitter(rng, spawn.jitter);
        batch.push(Particle::spawn(
            ParticleKind::Blob,
            at,
            &config.blob,
            config.rotation_speed,
            &config.palette,
            rng,
        ));
        if spawn.vapor_chance > 0.0 && rng.gen::<f32>() < spawn.vapor_chance {
            batch.push(Particle::spawn(
                ParticleKind::Vapor,
                at,
                &config.vapor,
                config.rotation_speed,
                &config.palette,
                rng,
            ));
        }
    }

    if distance > spawn.splash_min_distance
        && spawn.splash_chance > 0.0
        && rng.gen::<f32>() < spawn.splash_chance
    {
        let at = cursor.position + jitter(rng, spawn.splash_jitter);
        batch.push(Particle::spawn(
            ParticleKind::Blob,
            at,
            &config.blob,
            config.rotation_speed,
            &config.palette,
            rng,
        ));
    }

    cursor.last_spawn = cursor.position;
    log::trace!(
        "[spawn] distance={:.1} trail={} batch={}",
        distance,
        count,
        batch.len()
    );
    batch
}
