use crate::constants::STATS_LOG_INTERVAL_FRAMES;
use crate::dom;
use crate::render::{self, CanvasSurface};
use instant::Instant;
use rand::rngs::SmallRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use watercolor_core::{FrameId, FrameOutcome, FrameScheduler, Mount};
use web_sys as web;

/// Slot holding the `requestAnimationFrame` callback. Emptying it breaks the
/// mount <-> closure reference cycle.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub type SharedMount = Rc<RefCell<Mount<SmallRng, RafScheduler>>>;

pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: web::Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request(&mut self) -> Option<FrameId> {
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameId(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, id: FrameId) {
        _ = self.window.cancel_animation_frame(id.0);
    }
}

pub struct FrameContext {
    pub mount: SharedMount,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
    pub frames: u32,
    pub frame_time_accum: f32,
    pub particles_accum: usize,
}

impl FrameContext {
    pub fn new(mount: SharedMount, canvas: web::HtmlCanvasElement) -> Self {
        Self {
            mount,
            canvas,
            last_instant: Instant::now(),
            frames: 0,
            frame_time_accum: 0.0,
            particles_accum: 0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let Ok(mut mount) = self.mount.try_borrow_mut() else {
            return;
        };
        let outcome = match render::context_2d(&self.canvas) {
            Some(ctx) => {
                let mut surface = CanvasSurface::new(&ctx, &self.canvas, dom::device_pixel_ratio());
                mount.on_frame(Some(&mut surface))
            }
            None => mount.on_frame::<CanvasSurface<'_>>(None),
        };
        drop(mount);

        match outcome {
            FrameOutcome::Rendered(stats) => {
                self.frames += 1;
                self.frame_time_accum += dt_sec;
                self.particles_accum += stats.live;
                if self.frames >= STATS_LOG_INTERVAL_FRAMES {
                    let n = self.frames as f32;
                    log::debug!(
                        "[frame] avg {:.2} ms, avg {:.1} particles over {} frames",
                        self.frame_time_accum / n * 1000.0,
                        self.particles_accum as f32 / n,
                        self.frames
                    );
                    self.frames = 0;
                    self.frame_time_accum = 0.0;
                    self.particles_accum = 0;
                }
            }
            FrameOutcome::SurfaceUnavailable => {
                log::debug!("canvas or 2d context unavailable; frame loop paused");
            }
            FrameOutcome::Stale => {}
        }
    }
}

/// Install the frame callback and request the first frame.
pub fn start_loop(mount: SharedMount, canvas: web::HtmlCanvasElement, callback: &FrameCallback) {
    let mut frame_ctx = FrameContext::new(mount.clone(), canvas);
    *callback.borrow_mut() = Some(Closure::wrap(
        Box::new(move || frame_ctx.frame()) as Box<dyn FnMut()>
    ));
    mount.borrow_mut().start();
}
