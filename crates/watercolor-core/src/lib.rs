//! Platform-free core of the watercolor pointer trail.
//!
//! Nothing here touches the DOM; the web front-end supplies a [`Surface`]
//! and a [`FrameScheduler`] and feeds pointer positions in.

pub mod color;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod lifecycle;
pub mod particle;
pub mod render;
pub mod spawn;
pub mod surface;

pub use color::*;
pub use config::*;
pub use cursor::CursorState;
pub use engine::{FrameStats, ParticleEngine};
pub use lifecycle::{FrameId, FrameOutcome, FrameScheduler, Mount, Phase};
pub use particle::{Particle, ParticleKind};
pub use surface::{ColorStop, RadialGradient, Surface};
