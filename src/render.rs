use glam::Vec2;
use wasm_bindgen::JsCast;
use watercolor_core::{RadialGradient, Rgba, Surface};
use web_sys as web;

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    if !canvas.is_connected() {
        return None;
    }
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()
}

/// Canvas 2D context drawn in CSS pixels; the device pixel ratio is folded
/// into the base transform.
pub struct CanvasSurface<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
    size: Vec2,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(
        ctx: &'a web::CanvasRenderingContext2d,
        canvas: &web::HtmlCanvasElement,
        dpr: f64,
    ) -> Self {
        let dpr = if dpr > 0.0 { dpr } else { 1.0 };
        _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        let size = Vec2::new(
            (canvas.width() as f64 / dpr) as f32,
            (canvas.height() as f64 / dpr) as f32,
        );
        Self { ctx, size }
    }
}

impl Surface for CanvasSurface<'_> {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, point: Vec2) {
        self.ctx.move_to(point.x as f64, point.y as f64);
    }

    fn line_to(&mut self, point: Vec2) {
        self.ctx.line_to(point.x as f64, point.y as f64);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) {
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            start as f64,
            end as f64,
        );
    }

    fn fill_gradient(&mut self, gradient: &RadialGradient) {
        let Ok(fill) = self.ctx.create_radial_gradient(
            gradient.center.x as f64,
            gradient.center.y as f64,
            gradient.inner_radius.max(0.0) as f64,
            gradient.center.x as f64,
            gradient.center.y as f64,
            gradient.outer_radius.max(0.0) as f64,
        ) else {
            return;
        };
        for stop in &gradient.stops {
            _ = fill.add_color_stop(
                stop.offset.clamp(0.0, 1.0),
                &gradient.color.css_with_alpha(stop.alpha),
            );
        }
        self.ctx.set_fill_style_canvas_gradient(&fill);
        self.ctx.fill();
    }
}
