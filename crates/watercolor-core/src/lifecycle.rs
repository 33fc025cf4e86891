//! Mount/teardown around a [`ParticleEngine`] and a frame scheduler.
//!
//! The host owns the actual callback (for example `requestAnimationFrame`)
//! and calls [`Mount::on_frame`] from it. Everything else is bookkeeping that
//! makes teardown final: once torn down, no frame renders, no pointer writes
//! land, and the pending frame is cancelled exactly once.

use crate::engine::{FrameStats, ParticleEngine};
use crate::surface::Surface;
use rand::Rng;

/// Host handle for a requested frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub i32);

pub trait FrameScheduler {
    /// Ask for one callback before the next repaint. `None` when the host
    /// could not schedule it.
    fn request(&mut self) -> Option<FrameId>;
    fn cancel(&mut self, id: FrameId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    /// Surface went missing; waiting for `resume`.
    Suspended,
    TornDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Rendered(FrameStats),
    /// No frame was pending: cancelled, suspended or torn down.
    Stale,
    SurfaceUnavailable,
}

pub struct Mount<R: Rng, F: FrameScheduler> {
    engine: ParticleEngine<R>,
    scheduler: F,
    pending: Option<FrameId>,
    phase: Phase,
}

impl<R: Rng, F: FrameScheduler> Mount<R, F> {
    pub fn new(engine: ParticleEngine<R>, scheduler: F) -> Self {
        Self {
            engine,
            scheduler,
            pending: None,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<FrameId> {
        self.pending
    }

    pub fn engine(&self) -> &ParticleEngine<R> {
        &self.engine
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn is_torn_down(&self) -> bool {
        self.phase == Phase::TornDown
    }

    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
            self.schedule_next();
        }
    }

    /// Restart a loop that stopped for lack of a surface.
    pub fn resume(&mut self) {
        if self.phase == Phase::Suspended {
            log::debug!("[mount] resuming frame loop");
            self.phase = Phase::Running;
            self.schedule_next();
        }
    }

    fn schedule_next(&mut self) {
        self.pending = self.scheduler.request();
        if self.pending.is_none() {
            log::warn!("[mount] frame request refused; loop stalled");
        }
    }

    /// Host frame callback. `surface` is `None` when the canvas or its
    /// context is unavailable.
    pub fn on_frame<S: Surface + ?Sized>(&mut self, surface: Option<&mut S>) -> FrameOutcome {
        if self.phase != Phase::Running || self.pending.take().is_none() {
            return FrameOutcome::Stale;
        }
        let Some(surface) = surface else {
            log::warn!("[mount] render surface unavailable; suspending");
            self.phase = Phase::Suspended;
            return FrameOutcome::SurfaceUnavailable;
        };
        let stats = self.engine.frame(surface);
        self.schedule_next();
        FrameOutcome::Rendered(stats)
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if !self.is_torn_down() {
            self.engine.pointer_moved(x, y);
        }
    }

    pub fn pointer_left(&mut self) {
        if !self.is_torn_down() {
            self.engine.pointer_left();
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if !self.is_torn_down() {
            self.engine.resize(width, height);
        }
    }

    /// Cancel the pending frame and refuse all further work. Returns `false`
    /// when the mount was already torn down.
    pub fn teardown(&mut self) -> bool {
        if self.is_torn_down() {
            return false;
        }
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        self.phase = Phase::TornDown;
        log::debug!("[mount] torn down with {} particles", self.engine.len());
        true
    }
}
