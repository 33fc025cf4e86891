#![cfg(target_arch = "wasm32")]
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use watercolor_core::{Mount, ParticleConfig, ParticleEngine};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod settings;

use frame::{FrameCallback, RafScheduler, SharedMount};

thread_local! {
    // Handle for the canvas mounted by `start()`; lives as long as the page.
    static AUTO_MOUNT: RefCell<Option<WatercolorHandle>> = const { RefCell::new(None) };
}

/// A running particle trail bound to one canvas.
#[wasm_bindgen]
pub struct WatercolorHandle {
    mount: SharedMount,
    listeners: events::Listeners,
    callback: FrameCallback,
}

#[wasm_bindgen]
impl WatercolorHandle {
    /// Start the trail on `<canvas id={canvas_id}>`.
    #[wasm_bindgen(constructor)]
    pub fn mount(canvas_id: &str) -> Result<WatercolorHandle, JsValue> {
        mount_on(canvas_id).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Stop the frame loop and detach every listener. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        let torn_down = match self.mount.try_borrow_mut() {
            Ok(mut m) => m.teardown(),
            Err(_) => {
                log::error!("unmount while a frame is running; skipped");
                return;
            }
        };
        self.listeners.detach_all();
        self.callback.borrow_mut().take();
        if torn_down {
            log::info!("watercolor trail unmounted");
        }
    }

    /// Restart a loop paused because the canvas left the document.
    pub fn resume(&self) {
        if let Ok(mut m) = self.mount.try_borrow_mut() {
            m.resume();
        }
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.mount.borrow().engine().len()
    }
}

impl Drop for WatercolorHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn load_config(canvas: &web::HtmlCanvasElement) -> ParticleConfig {
    let overrides = dom::dataset_overrides(canvas);
    if overrides.is_empty() {
        return ParticleConfig::default();
    }
    match settings::apply_overrides(ParticleConfig::default(), &overrides) {
        Ok(config) => {
            log::debug!("[config] applied {} canvas overrides", overrides.len());
            config
        }
        Err(e) => {
            log::warn!("[config] {e:#}; using defaults");
            ParticleConfig::default()
        }
    }
}

fn load_rng(canvas: &web::HtmlCanvasElement) -> SmallRng {
    let raw = dom::dataset_value(canvas, constants::DATA_SEED);
    match settings::parse_seed(raw.as_deref()) {
        Ok(Some(seed)) => SmallRng::seed_from_u64(seed),
        Ok(None) => SmallRng::from_entropy(),
        Err(e) => {
            log::warn!("[config] {e:#}; seeding from entropy");
            SmallRng::from_entropy()
        }
    }
}

fn mount_on(canvas_id: &str) -> anyhow::Result<WatercolorHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;

    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    let mut engine = ParticleEngine::new(load_config(&canvas), load_rng(&canvas))?;
    engine.resize(w, h);

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler::new(window, callback.clone());
    let mount: SharedMount = Rc::new(RefCell::new(Mount::new(engine, scheduler)));

    let mut listeners = events::wire_pointer_handlers(&canvas, &mount);
    listeners.extend(events::wire_canvas_resize(&canvas, &mount));
    log::info!(
        "watercolor trail mounted on #{canvas_id} ({w}x{h}, {} listeners)",
        listeners.len()
    );

    frame::start_loop(mount.clone(), canvas, &callback);
    Ok(WatercolorHandle {
        mount,
        listeners,
        callback,
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("watercolor-web starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    if document
        .get_element_by_id(constants::AUTO_MOUNT_CANVAS_ID)
        .is_none()
    {
        return Ok(());
    }
    match mount_on(constants::AUTO_MOUNT_CANVAS_ID) {
        Ok(handle) => AUTO_MOUNT.with(|slot| *slot.borrow_mut() = Some(handle)),
        Err(e) => log::error!("auto-mount failed: {e:#}"),
    }
    Ok(())
}
