//! Drawing boundary between the engine and a concrete 2D context.

use crate::color::{Hsl, Rgba};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub alpha: f32,
}

/// Radial gradient from `inner_radius` to `outer_radius` around `center`,
/// one hue with varying opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub color: Hsl,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, outer_radius: f32, color: Hsl) -> Self {
        Self {
            center,
            inner_radius: 0.0,
            outer_radius,
            color,
            stops: Vec::with_capacity(5),
        }
    }

    pub fn stop(mut self, offset: f32, alpha: f32) -> Self {
        self.stops.push(ColorStop { offset, alpha });
        self
    }
}

/// Subset of the canvas 2D context the renderer uses.
///
/// Path calls build the current path; `fill_gradient` fills it.
pub trait Surface {
    /// Logical drawing size in pixels.
    fn size(&self) -> Vec2;
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Vec2);
    fn line_to(&mut self, point: Vec2);
    fn close_path(&mut self);
    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32);
    fn fill_gradient(&mut self, gradient: &RadialGradient);
}
