use crate::config::{ConfigError, ParticleConfig};
use crate::cursor::CursorState;
use crate::particle::{Particle, ParticleKind};
use crate::render::draw_particle;
use crate::spawn;
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;

/// Counters for a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub spawned: usize,
    pub shed: usize,
    pub expired: usize,
    pub evicted: usize,
    pub drawn: usize,
    pub live: usize,
}

/// Particle list, cursor and RNG of one render surface.
///
/// All particle mutation happens inside [`ParticleEngine::frame`]; pointer
/// callbacks only touch the cursor.
pub struct ParticleEngine<R: Rng> {
    config: ParticleConfig,
    particles: Vec<Particle>,
    cursor: CursorState,
    surface_size: Vec2,
    rng: R,
}

impl<R: Rng> ParticleEngine<R> {
    pub fn new(config: ParticleConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let particles = Vec::with_capacity(config.cap);
        Ok(Self {
            config,
            particles,
            cursor: CursorState::default(),
            surface_size: Vec2::ZERO,
            rng,
        })
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    /// Record a surface-relative pointer position.
    #[inline]
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.cursor.move_to(Vec2::new(x, y));
    }

    pub fn pointer_left(&mut self) {
        self.cursor.reset(self.surface_size);
    }

    /// Last write wins; a frame in flight simply picks up the new size next time.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface_size = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Advance, cull and paint every particle once.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        let mut stats = FrameStats::default();
        self.surface_size = surface.size();

        // Trail decay: translucent background instead of a clear.
        surface.fill_rect(Vec2::ZERO, self.surface_size, self.config.trail);

        let batch = spawn::evaluate(&self.config, &mut self.cursor, &mut self.rng);
        stats.spawned = batch.len();
        self.particles.extend(batch);

        let config = &self.config;
        let rng = &mut self.rng;
        let mut shed = Vec::new();
        self.particles.retain_mut(|p| {
            let tuning = match p.kind {
                ParticleKind::Blob => &config.blob,
                ParticleKind::Vapor => &config.vapor,
            };
            p.advance(tuning);
            if !p.is_alive() {
                stats.expired += 1;
                return false;
            }
            if p.kind == ParticleKind::Blob
                && p.age > config.shedding.min_age
                && config.shedding.chance > 0.0
                && rng.gen::<f32>() < config.shedding.chance
            {
                shed.push(Particle::spawn(
                    ParticleKind::Vapor,
                    p.position + Vec2::new(0.0, config.shedding.offset_y),
                    &config.vapor,
                    config.rotation_speed,
                    &config.palette,
                    &mut *rng,
                ));
            }
            draw_particle(&mut *surface, p, &config.render);
            stats.drawn += 1;
            true
        });
        stats.shed = shed.len();
        self.particles.extend(shed);

        if self.particles.len() > self.config.cap {
            let excess = self.particles.len() - self.config.cap;
            self.particles.drain(..excess);
            stats.evicted = excess;
        }

        stats.live = self.particles.len();
        log::trace!("[frame] {:?}", stats);
        stats
    }
}
