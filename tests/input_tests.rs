// Host-side tests for pure input helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_to_surface_subtracts_rect_origin() {
    let p = client_to_surface(Vec2::new(150.0, 90.0), Vec2::new(100.0, 40.0));
    assert_eq!(p, Vec2::new(50.0, 50.0));
}

#[test]
fn client_to_surface_allows_points_outside_the_canvas() {
    // Out-of-surface coordinates are passed through; the surface clips them.
    let p = client_to_surface(Vec2::new(10.0, 5.0), Vec2::new(100.0, 40.0));
    assert_eq!(p, Vec2::new(-90.0, -35.0));
}

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 1.0, 1), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 2.0, 1), (1600, 1200));
    assert_eq!(backing_size(333.0, 100.0, 1.5, 1), (499, 150));
}

#[test]
fn backing_size_never_collapses() {
    assert_eq!(backing_size(0.0, 0.0, 2.0, 1), (1, 1));
    assert_eq!(backing_size(-20.0, 10.0, 1.0, 1), (1, 10));
}

#[test]
fn backing_size_ignores_bogus_ratio() {
    assert_eq!(backing_size(100.0, 50.0, 0.0, 1), (100, 50));
    assert_eq!(backing_size(100.0, 50.0, f64::NAN, 1), (100, 50));
    assert_eq!(backing_size(100.0, 50.0, -3.0, 1), (100, 50));
}
