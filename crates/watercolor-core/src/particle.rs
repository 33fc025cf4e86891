use crate::color::Hsl;
use crate::config::KindConfig;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    /// Pigment blob left along the pointer trail.
    Blob,
    /// Faint rising wisp.
    Vapor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Hsl,
    pub alpha: f32,
    pub age: u32,
    pub max_age: u32,
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Particle {
    /// Create a particle with every random attribute drawn from `rng`.
    ///
    /// `palette` must not be empty; [`crate::ParticleConfig::validate`]
    /// guarantees that for engine-owned configs.
    pub fn spawn<R: Rng + ?Sized>(
        kind: ParticleKind,
        position: Vec2,
        tuning: &KindConfig,
        rotation_speed: f32,
        palette: &[Hsl],
        rng: &mut R,
    ) -> Self {
        let angle = rng.gen::<f32>() * TAU;
        let speed = tuning.speed.sample(rng);
        let size = tuning.size.sample(rng);
        let color = palette
            .choose(rng)
            .copied()
            .unwrap_or(crate::color::DEFAULT_PALETTE[0]);
        let vx = angle.cos() * speed;
        let vy = match &tuning.rise {
            Some(rise) => -rise.sample(rng),
            None => angle.sin() * speed,
        };
        Self {
            kind,
            position,
            velocity: Vec2::new(vx, vy),
            size,
            color,
            alpha: tuning.alpha.sample(rng),
            age: 0,
            max_age: tuning.max_age.sample(rng),
            rotation: rng.gen::<f32>() * TAU,
            rotation_speed: (rng.gen::<f32>() * 2.0 - 1.0) * rotation_speed,
        }
    }

    /// One frame of motion: age, drift, damping, spin and growth.
    #[inline]
    pub fn advance(&mut self, tuning: &KindConfig) {
        self.age = self.age.saturating_add(1);
        self.position += self.velocity;
        self.velocity.x *= tuning.damping.0;
        self.velocity.y *= tuning.damping.1;
        self.rotation += self.rotation_speed;
        self.size += tuning.growth;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.age < self.max_age
    }

    /// Fraction of the lifetime already spent, in [0, 1].
    #[inline]
    pub fn life_ratio(&self) -> f32 {
        if self.max_age == 0 {
            return 1.0;
        }
        (self.age as f32 / self.max_age as f32).min(1.0)
    }

    /// Opacity after lifetime fade. Vapor fades quadratically so it lingers
    /// before dissolving.
    #[inline]
    pub fn fade_alpha(&self) -> f32 {
        let r = self.life_ratio();
        match self.kind {
            ParticleKind::Blob => self.alpha * (1.0 - r),
            ParticleKind::Vapor => self.alpha * (1.0 - r * r),
        }
    }
}
