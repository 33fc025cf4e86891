use crate::constants::{MIN_BACKING_PX, OVERRIDE_KEYS};
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{id} is not a canvas: {:?}", e)))
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Match the backing store to the displayed size of the canvas' parent (or
/// the canvas itself when detached) times the device pixel ratio. Returns
/// the logical size in CSS pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let (css_w, css_h) = match canvas.parent_element() {
        Some(parent) => (parent.client_width() as f64, parent.client_height() as f64),
        None => {
            let rect = canvas.get_bounding_client_rect();
            (rect.width(), rect.height())
        }
    };
    let dpr = device_pixel_ratio();
    let (w_px, h_px) = input::backing_size(css_w, css_h, dpr, MIN_BACKING_PX);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (css_w as f32, css_h as f32)
}

/// Tuning overrides present in the canvas dataset.
pub fn dataset_overrides(canvas: &web::HtmlCanvasElement) -> Vec<(&'static str, String)> {
    let dataset = canvas.dataset();
    OVERRIDE_KEYS
        .iter()
        .filter_map(|key| dataset.get(key).map(|v| (*key, v)))
        .collect()
}

pub fn dataset_value(canvas: &web::HtmlCanvasElement, key: &str) -> Option<String> {
    canvas.dataset().get(key)
}
