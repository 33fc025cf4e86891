//! Tuning for the particle engine.
//!
//! The defaults reproduce the landing-page look. None
//! of the numbers are invariants: hosts may override any of them as long as
//! [`ParticleConfig::validate`] accepts the result.

use crate::color::{Hsl, Rgba, DEFAULT_PALETTE, DEFAULT_TRAIL_FILL};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("particle cap must be at least 1")]
    ZeroCap,
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("{field} must be finite and non-negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be strictly positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must lie in [0, 1] (got {value})")]
    OutOfUnit { field: &'static str, value: f32 },
    #[error("{field} span is inverted ({min} > {max})")]
    InvertedSpan {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{field} age range is invalid ({min}..={max}, min must be >= 1)")]
    InvalidAgeRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
    #[error("max particles per event must be at least 1")]
    ZeroPerEvent,
    #[error("render layers must be between 1 and {max} (got {got})")]
    LayerCount { got: usize, max: usize },
    #[error("outline needs at least 3 points (got {0})")]
    OutlinePoints(usize),
}

/// Uniform float span sampled as `min + u * (max - min)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + rng.gen::<f32>() * (self.max - self.min)
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        check_non_negative(field, self.min)?;
        check_non_negative(field, self.max)?;
        if self.min > self.max {
            return Err(ConfigError::InvertedSpan {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Inclusive integer lifetime range in frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(frames: u32) -> Self {
        Self {
            min: frames,
            max: frames,
        }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max {
            return Err(ConfigError::InvalidAgeRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Pointer-to-particle conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnConfig {
    /// Movement must exceed this distance (px) since the last spawn.
    pub min_distance: f32,
    /// One extra particle per `step` px travelled.
    pub step: f32,
    pub max_per_event: usize,
    /// Full width of the square jitter box around each interpolated point.
    pub jitter: f32,
    /// Chance that a trail blob is accompanied by a vapor wisp.
    pub vapor_chance: f32,
    /// Chance of one extra blob near the pointer on fast strokes.
    pub splash_chance: f32,
    pub splash_min_distance: f32,
    pub splash_jitter: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_distance: 1.0,
            step: 5.0,
            max_per_event: 4,
            jitter: 40.0,
            vapor_chance: 0.3,
            splash_chance: 0.5,
            splash_min_distance: 20.0,
            splash_jitter: 60.0,
        }
    }
}

/// Per-kind appearance and motion.
#[derive(Clone, Debug, PartialEq)]
pub struct KindConfig {
    pub speed: Span,
    /// Upward speed; when set it replaces the vertical velocity component.
    pub rise: Option<Span>,
    pub size: Span,
    pub alpha: Span,
    pub max_age: AgeRange,
    /// Size added every frame.
    pub growth: f32,
    /// Per-frame velocity multipliers (x, y).
    pub damping: (f32, f32),
}

impl KindConfig {
    pub fn blob() -> Self {
        Self {
            speed: Span::new(1.0, 4.0),
            rise: None,
            size: Span::new(20.0, 70.0),
            alpha: Span::new(0.08, 0.28),
            max_age: AgeRange::new(120, 300),
            growth: 0.4,
            damping: (0.97, 0.97),
        }
    }

    pub fn vapor() -> Self {
        Self {
            speed: Span::new(0.3, 1.3),
            rise: Some(Span::new(0.5, 2.0)),
            size: Span::new(8.0, 28.0),
            alpha: Span::new(0.02, 0.10),
            max_age: AgeRange::new(40, 120),
            growth: 0.6,
            damping: (0.97, 0.99),
        }
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        self.speed.check(field)?;
        if let Some(rise) = &self.rise {
            rise.check(field)?;
        }
        self.size.check(field)?;
        self.alpha.check(field)?;
        check_unit(field, self.alpha.max)?;
        self.max_age.check(field)?;
        check_non_negative(field, self.growth)?;
        check_damping(field, self.damping.0)?;
        check_damping(field, self.damping.1)?;
        Ok(())
    }
}

/// Vapor wisps lifted off ageing blobs.
#[derive(Clone, Debug, PartialEq)]
pub struct SheddingConfig {
    pub min_age: u32,
    pub chance: f32,
    pub offset_y: f32,
}

impl Default for SheddingConfig {
    fn default() -> Self {
        Self {
            min_age: 20,
            chance: 0.08,
            offset_y: -5.0,
        }
    }
}

pub const MAX_LAYERS: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub layers: usize,
    /// Radius lost per layer as a fraction of the particle size.
    pub layer_shrink: f32,
    /// Opacity lost per layer as a fraction of the faded alpha.
    pub layer_fade: f32,
    pub outline_points: usize,
    pub outline_variance: f32,
    pub outline_lobes: f32,
    pub glow: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layers: 4,
            layer_shrink: 0.12,
            layer_fade: 0.15,
            outline_points: 10,
            outline_variance: 0.35,
            outline_lobes: 4.0,
            glow: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub cap: usize,
    pub spawn: SpawnConfig,
    pub blob: KindConfig,
    pub vapor: KindConfig,
    pub shedding: SheddingConfig,
    /// Half-width of the symmetric rotation speed span (radians/frame).
    pub rotation_speed: f32,
    pub render: RenderConfig,
    pub trail: Rgba,
    pub palette: Vec<Hsl>,
}

impl Default for ParticleConfig {
    /// Landing-page tuning. Besides the trail blobs of
    /// [`spawn::trail_count`](crate::spawn::trail_count), each stroke may add
    /// random vapor wisps and a splash blob, and ageing blobs shed vapor; use
    /// [`ParticleConfig::blobs_only`] for exact per-stroke counts.
    fn default() -> Self {
        Self {
            cap: 100,
            spawn: SpawnConfig::default(),
            blob: KindConfig::blob(),
            vapor: KindConfig::vapor(),
            shedding: SheddingConfig::default(),
            rotation_speed: 0.015,
            render: RenderConfig::default(),
            trail: DEFAULT_TRAIL_FILL,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl ParticleConfig {
    /// Only trail blobs: no vapor, no splash, no shedding.
    pub fn blobs_only(mut self) -> Self {
        self.spawn.vapor_chance = 0.0;
        self.spawn.splash_chance = 0.0;
        self.shedding.chance = 0.0;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cap == 0 {
            return Err(ConfigError::ZeroCap);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        let s = &self.spawn;
        check_non_negative("spawn.min_distance", s.min_distance)?;
        check_positive("spawn.step", s.step)?;
        if s.max_per_event == 0 {
            return Err(ConfigError::ZeroPerEvent);
        }
        check_non_negative("spawn.jitter", s.jitter)?;
        check_unit("spawn.vapor_chance", s.vapor_chance)?;
        check_unit("spawn.splash_chance", s.splash_chance)?;
        check_non_negative("spawn.splash_min_distance", s.splash_min_distance)?;
        check_non_negative("spawn.splash_jitter", s.splash_jitter)?;

        self.blob.check("blob")?;
        self.vapor.check("vapor")?;
        check_unit("shedding.chance", self.shedding.chance)?;
        check_non_negative("rotation_speed", self.rotation_speed)?;

        let r = &self.render;
        if r.layers == 0 || r.layers > MAX_LAYERS {
            return Err(ConfigError::LayerCount {
                got: r.layers,
                max: MAX_LAYERS,
            });
        }
        // The innermost layer must keep a positive radius.
        if r.layer_shrink * (r.layers - 1) as f32 >= 1.0 {
            return Err(ConfigError::OutOfUnit {
                field: "render.layer_shrink",
                value: r.layer_shrink,
            });
        }
        check_unit("render.layer_shrink", r.layer_shrink)?;
        check_unit("render.layer_fade", r.layer_fade)?;
        if r.outline_points < 3 {
            return Err(ConfigError::OutlinePoints(r.outline_points));
        }
        check_unit("render.outline_variance", r.outline_variance)?;
        check_non_negative("render.outline_lobes", r.outline_lobes)?;
        check_unit("trail.alpha", self.trail.a)?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn check_damping(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // Motion must decay, never stall or grow.
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnit { field, value })
    }
}

fn check_unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnit { field, value })
    }
}
