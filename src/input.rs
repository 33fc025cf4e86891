use glam::Vec2;
use web_sys as web;

/// Map a client-space point into the canvas' logical (CSS pixel) space.
#[inline]
pub fn client_to_surface(client: Vec2, rect_origin: Vec2) -> Vec2 {
    client - rect_origin
}

#[inline]
fn rect_origin(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}

#[inline]
pub fn mouse_surface_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    client_to_surface(client, rect_origin(canvas))
}

/// Position of the first active touch, if any.
#[inline]
pub fn touch_surface_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    let client = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
    Some(client_to_surface(client, rect_origin(canvas)))
}

/// Backing-store size for a displayed size at a device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, min_px: u32) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_width.max(0.0) * dpr) as u32;
    let h = (css_height.max(0.0) * dpr) as u32;
    (w.max(min_px), h.max(min_px))
}
