use crate::config::RenderConfig;
use crate::particle::{Particle, ParticleKind};
use crate::surface::{RadialGradient, Surface};
use glam::Vec2;
use std::f32::consts::TAU;

// Opacity ramp (offset, fraction of layer alpha) of one blob layer
const LAYER_RAMP: [(f32, f32); 4] = [(0.0, 1.0), (0.25, 0.8), (0.5, 0.4), (0.75, 0.15)];

/// Paint one live particle.
pub fn draw_particle<S: Surface + ?Sized>(
    surface: &mut S,
    particle: &Particle,
    cfg: &RenderConfig,
) {
    match particle.kind {
        ParticleKind::Blob => draw_blob(surface, particle, cfg),
        ParticleKind::Vapor => draw_vapor(surface, particle),
    }
}

/// Radius of a blob outline at `angle`: a circle bent by a periodic wobble
/// that turns with the particle.
#[inline]
pub fn outline_radius(layer_radius: f32, angle: f32, rotation: f32, cfg: &RenderConfig) -> f32 {
    let noise = (angle * cfg.outline_lobes + rotation * 2.0).sin() * cfg.outline_variance;
    layer_radius * (1.0 + noise)
}

fn fill_circle<S: Surface + ?Sized>(surface: &mut S, gradient: &RadialGradient) {
    surface.begin_path();
    surface.arc(gradient.center, gradient.outer_radius, 0.0, TAU);
    surface.fill_gradient(gradient);
}

fn draw_blob<S: Surface + ?Sized>(surface: &mut S, p: &Particle, cfg: &RenderConfig) {
    let alpha = p.fade_alpha();

    if cfg.glow {
        let glow = RadialGradient::new(p.position, p.size * 2.0, p.color)
            .stop(0.0, alpha * 0.5)
            .stop(0.3, alpha * 0.2)
            .stop(1.0, 0.0);
        fill_circle(surface, &glow);
    }

    surface.save();
    surface.translate(p.position);
    surface.rotate(p.rotation);

    for layer in 0..cfg.layers {
        let i = layer as f32;
        let radius = p.size * (1.0 - i * cfg.layer_shrink);
        let layer_alpha = alpha * (1.0 - i * cfg.layer_fade);

        let mut gradient = RadialGradient::new(Vec2::ZERO, radius, p.color);
        for (offset, k) in LAYER_RAMP {
            gradient = gradient.stop(offset, layer_alpha * k);
        }
        let gradient = gradient.stop(1.0, 0.0);

        surface.begin_path();
        // Closed outline; the last vertex repeats the first.
        for j in 0..=cfg.outline_points {
            let angle = j as f32 / cfg.outline_points as f32 * TAU;
            let r = outline_radius(radius, angle, p.rotation, cfg);
            let point = Vec2::new(angle.cos(), angle.sin()) * r;
            if j == 0 {
                surface.move_to(point);
            } else {
                surface.line_to(point);
            }
        }
        surface.close_path();
        surface.fill_gradient(&gradient);
    }

    surface.restore();
}

fn draw_vapor<S: Surface + ?Sized>(surface: &mut S, p: &Particle) {
    let alpha = p.fade_alpha();
    let radius = p.size * (1.0 + p.life_ratio() * 2.0);
    let gradient = RadialGradient::new(p.position, radius, p.color)
        .stop(0.0, alpha)
        .stop(0.4, alpha * 0.5)
        .stop(1.0, 0.0);
    fill_circle(surface, &gradient);
}
