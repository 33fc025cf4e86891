// Shared fakes for the host-side engine tests.

#![allow(dead_code)]

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use watercolor_core::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    FillRect(Rgba),
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    ClosePath,
    Arc(Vec2, f32),
    Fill(RadialGradient),
}

/// Surface that records every call instead of drawing.
pub struct RecordingSurface {
    pub size: Vec2,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ops: Vec::new(),
        }
    }

    pub fn fills(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Fill(_))).count()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }
    fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, color: Rgba) {
        self.ops.push(Op::FillRect(color));
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, offset: Vec2) {
        self.ops.push(Op::Translate(offset));
    }
    fn rotate(&mut self, radians: f32) {
        self.ops.push(Op::Rotate(radians));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, point: Vec2) {
        self.ops.push(Op::MoveTo(point));
    }
    fn line_to(&mut self, point: Vec2) {
        self.ops.push(Op::LineTo(point));
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
    fn arc(&mut self, center: Vec2, radius: f32, _start: f32, _end: f32) {
        self.ops.push(Op::Arc(center, radius));
    }
    fn fill_gradient(&mut self, gradient: &RadialGradient) {
        self.ops.push(Op::Fill(gradient.clone()));
    }
}

/// Scheduler that hands out increasing ids and remembers cancellations.
#[derive(Default)]
pub struct FakeScheduler {
    pub next_id: i32,
    pub requested: Vec<FrameId>,
    pub cancelled: Vec<FrameId>,
    pub refuse: bool,
}

impl FrameScheduler for FakeScheduler {
    fn request(&mut self) -> Option<FrameId> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        let id = FrameId(self.next_id);
        self.requested.push(id);
        Some(id)
    }

    fn cancel(&mut self, id: FrameId) {
        self.cancelled.push(id);
    }
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn engine_with(config: ParticleConfig, seed: u64) -> ParticleEngine<StdRng> {
    ParticleEngine::new(config, seeded(seed)).expect("valid config")
}

/// Anchor at `from`, then move to `to`; each position is consumed by a frame.
pub fn stroke(
    engine: &mut ParticleEngine<StdRng>,
    surface: &mut RecordingSurface,
    from: (f32, f32),
    to: (f32, f32),
) -> FrameStats {
    engine.pointer_moved(from.0, from.1);
    engine.frame(surface);
    engine.pointer_moved(to.0, to.1);
    engine.frame(surface)
}

pub fn run_idle(
    engine: &mut ParticleEngine<StdRng>,
    surface: &mut RecordingSurface,
    frames: usize,
) -> Vec<FrameStats> {
    (0..frames).map(|_| engine.frame(surface)).collect()
}
