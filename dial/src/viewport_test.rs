#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn vec_approx_eq(a: Vector2, b: Vector2) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

fn viewport() -> Viewport {
    Viewport::new(Vector2::splat(1000.0))
}

// --- Defaults ---

#[test]
fn new_viewport_is_identity() {
    let vp = viewport();
    assert_eq!(vp.scale, Vector2::splat(1.0));
    assert_eq!(vp.physical_size, Vector2::splat(1000.0));
    assert_eq!(vp.pixel_ratio, 1.0);
}

// --- resize ---

#[test]
fn resize_uses_shorter_side() {
    let mut vp = viewport();
    let size = vp.resize(1280.0, 800.0, 1.0);
    assert_eq!(size, CanvasSize { physical_px: 800, css_px: 800.0 });
    assert_eq!(vp.scale, Vector2::splat(0.8));
}

#[test]
fn resize_multiplies_by_pixel_ratio() {
    let mut vp = viewport();
    let size = vp.resize(600.0, 900.0, 2.0);
    assert_eq!(size.physical_px, 1200);
    assert_eq!(size.css_px, 600.0);
    assert_eq!(vp.scale, Vector2::splat(1.2));
    assert_eq!(vp.physical_size, Vector2::splat(1200.0));
}

#[test]
fn resize_floors_fractional_backing_store() {
    let mut vp = viewport();
    let size = vp.resize(333.0, 333.0, 1.5);
    assert_eq!(size.physical_px, 499);
}

#[test]
fn resize_is_idempotent() {
    let mut vp = viewport();
    vp.resize(1024.0, 768.0, 1.25);
    let first = vp;
    vp.resize(1024.0, 768.0, 1.25);
    assert_eq!(vp, first);
}

#[test]
fn resize_back_restores_scale_exactly() {
    let mut vp = viewport();
    vp.resize(800.0, 600.0, 2.0);
    let first = vp.scale;
    vp.resize(1920.0, 1080.0, 1.0);
    assert_ne!(vp.scale, first);
    vp.resize(800.0, 600.0, 2.0);
    assert_eq!(vp.scale, first);
}

#[test]
fn resize_guards_degenerate_inputs() {
    let mut vp = viewport();
    let size = vp.resize(0.0, f64::NAN, -3.0);
    assert_eq!(size.physical_px, 1);
    assert_eq!(vp.pixel_ratio, 1.0);
    assert!(vp.scale.x > 0.0);
}

// --- screen_to_logical ---

#[test]
fn screen_to_logical_removes_offset_and_display_scale() {
    let mut vp = viewport();
    vp.resize(500.0, 500.0, 2.0);
    let logical = vp.screen_to_logical(Vector2::new(110.0, 60.0), Vector2::new(10.0, 10.0));
    assert!(vec_approx_eq(logical, Vector2::new(200.0, 100.0)));
}

#[test]
fn screen_to_logical_ignores_pixel_ratio() {
    let mut low = viewport();
    let mut high = viewport();
    low.resize(500.0, 500.0, 1.0);
    high.resize(500.0, 500.0, 3.0);
    let click = Vector2::new(250.0, 125.0);
    assert_eq!(
        low.screen_to_logical(click, Vector2::ZERO),
        high.screen_to_logical(click, Vector2::ZERO)
    );
}

#[test]
fn logical_to_screen_inverts_screen_to_logical() {
    let mut vp = viewport();
    vp.resize(740.0, 900.0, 1.5);
    let origin = Vector2::new(30.0, 80.0);
    let logical = Vector2::new(123.0, 456.0);
    let back = vp.screen_to_logical(vp.logical_to_screen(logical, origin), origin);
    assert!(vec_approx_eq(back, logical));
}
