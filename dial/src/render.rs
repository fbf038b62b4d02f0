//! Rendering: draws one clock frame onto a [`Surface`].
//!
//! This module only reads state. Draw order is fixed and later layers paint
//! over earlier ones:
//!
//! 1. clear
//! 2. face disc
//! 3. timer wedge
//! 4. ticks, then hour, minute and second hands, all inside one bracket that
//!    rotates the frame by −90° so angle 0 points at 12 o'clock
//!
//! All coordinates are logical; the surface already carries the viewport
//! scale. Shadow blur and offset ignore the canvas transform, so they are
//! multiplied by [`Scene::shadow_scale`] here.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::config::ClockConfig;
use crate::consts::HUB_RADIUS_RATIO;
use crate::geometry::{ClockTime, HandKind, hand_angle, hand_vectors, tick_endpoints, tick_vector};
use crate::style::StyleSpec;
use crate::surface::Surface;
use crate::timer::TimerState;
use crate::vector::Vector2;

/// Everything one frame reads.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub config: &'a ClockConfig,
    pub time: ClockTime,
    pub timer: &'a TimerState,
    /// Physical pixels per logical unit, applied to shadow metrics.
    pub shadow_scale: f64,
}

/// Draw the full clock.
///
/// # Errors
///
/// Returns the surface's error if a transform or arc call fails.
pub fn draw<S: Surface>(surface: &S, scene: &Scene<'_>) -> Result<(), S::Error> {
    let config = scene.config;
    let center = config.center();

    // Layer 1: clear.
    surface.clear_rect(Vector2::ZERO, config.logical_size);

    // Layer 2: face.
    draw_face(surface, scene)?;

    // Layer 3: timer wedge.
    if let Some(angle) = scene.timer.wedge_angle() {
        draw_wedge(surface, scene, angle)?;
    }

    // Layer 4: ticks and hands in the rotated frame. Restore runs even on
    // error so the rotation never outlives this call.
    surface.save();
    let rotated = draw_rotated(surface, scene, center);
    surface.restore();
    rotated
}

// =============================================================
// Layers
// =============================================================

fn draw_rotated<S: Surface>(surface: &S, scene: &Scene<'_>, center: Vector2) -> Result<(), S::Error> {
    surface.translate(center)?;
    surface.rotate(-FRAC_PI_2)?;
    surface.translate(-center)?;
    draw_ticks(surface, scene);
    draw_hands(surface, scene)
}

fn draw_face<S: Surface>(surface: &S, scene: &Scene<'_>) -> Result<(), S::Error> {
    let config = scene.config;
    let style = &config.theme.face;
    draw_disc(surface, config.center(), style.length_or(config.radius()), style, scene.shadow_scale)
}

/// Filled sector from 12 o'clock sweeping counter-clockwise by `angle`.
fn draw_wedge<S: Surface>(surface: &S, scene: &Scene<'_>, angle: f64) -> Result<(), S::Error> {
    let config = scene.config;
    let style = &config.theme.wedge;
    let Some(fill) = style.fill_style.as_deref() else {
        return Ok(());
    };
    let center = config.center();
    let start = -FRAC_PI_2;

    surface.save();
    apply_shadow(surface, style, scene.shadow_scale);
    surface.begin_path();
    surface.move_to(center);
    let radius = style.length_or(config.radius()).max(0.0);
    let traced = surface.arc(center, radius, start, start - angle, true);
    if traced.is_ok() {
        surface.close_path();
        surface.set_fill_style(fill);
        surface.fill();
    }
    surface.restore();
    traced
}

fn draw_ticks<S: Surface>(surface: &S, scene: &Scene<'_>) {
    let config = scene.config;
    let center = config.center();
    let radius = config.tick_radius();

    for index in 0..config.tick_count {
        let style = config.theme.tick(index, config.major_every);
        let dir = tick_vector(index, config.tick_count);
        let (start, end) = tick_endpoints(center, dir, radius, style.length_or(0.0));
        draw_line(surface, start, end, style, scene.shadow_scale);
    }
}

fn draw_hands<S: Surface>(surface: &S, scene: &Scene<'_>) -> Result<(), S::Error> {
    let config = scene.config;
    let theme = &config.theme;
    let angle = |kind| hand_angle(kind, scene.time, config.motion);

    draw_hand(surface, scene, angle(HandKind::Hour), &theme.hour_hand)?;
    draw_hand(surface, scene, angle(HandKind::Minute), &theme.minute_hand)?;

    // The second hand's line, cap and hub each cast a shadow onto the
    // others; a shadow-less pass on top hides the overlap.
    let second = angle(HandKind::Second);
    draw_hand(surface, scene, second, &theme.second_hand)?;
    draw_hand(surface, scene, second, &theme.second_hand.without_shadow())
}

/// Line from the tail to the tip, plus cap and hub discs when the style fills.
fn draw_hand<S: Surface>(surface: &S, scene: &Scene<'_>, angle: f64, style: &StyleSpec) -> Result<(), S::Error> {
    let center = scene.config.center();
    let (start, end) = hand_vectors(center, angle, style.offset_or_zero(), style.length_or(0.0));
    draw_line(surface, start, end, style, scene.shadow_scale);

    if style.fill_style.is_none() {
        return Ok(());
    }
    let disc = StyleSpec { stroke_style: None, line_width: None, ..style.clone() };
    let width = style.line_width_or_default();
    draw_disc(surface, end, width, &disc, scene.shadow_scale)?;
    draw_disc(surface, center, width * HUB_RADIUS_RATIO, &disc, scene.shadow_scale)
}

// =============================================================
// Primitives
// =============================================================

/// Stroked segment. Falls back to a 1-unit black line when unstyled.
fn draw_line<S: Surface>(surface: &S, from: Vector2, to: Vector2, style: &StyleSpec, shadow_scale: f64) {
    surface.save();
    apply_shadow(surface, style, shadow_scale);
    surface.set_line_width(style.line_width_or_default());
    surface.set_stroke_style(style.stroke_style_or_default());
    surface.begin_path();
    surface.move_to(from);
    surface.line_to(to);
    surface.stroke();
    surface.restore();
}

/// Circle, filled and/or stroked only where the style says so.
fn draw_disc<S: Surface>(
    surface: &S,
    center: Vector2,
    radius: f64,
    style: &StyleSpec,
    shadow_scale: f64,
) -> Result<(), S::Error> {
    surface.save();
    apply_shadow(surface, style, shadow_scale);
    surface.begin_path();
    let traced = surface.arc(center, radius.max(0.0), 0.0, TAU, false);
    if traced.is_ok() {
        if let Some(fill) = style.fill_style.as_deref() {
            surface.set_fill_style(fill);
            surface.fill();
        }
        if let Some(stroke) = style.stroke_style.as_deref() {
            if let Some(width) = style.line_width {
                surface.set_line_width(width);
            }
            surface.set_stroke_style(stroke);
            surface.stroke();
        }
    }
    surface.restore();
    traced
}

fn apply_shadow<S: Surface>(surface: &S, style: &StyleSpec, scale: f64) {
    surface.set_shadow_color(style.shadow_color_or_transparent());
    surface.set_shadow_blur(style.shadow_blur_or_zero() * scale);
    surface.set_shadow_offset(style.shadow_offset_or_zero() * scale);
}
