//! Pure clock geometry: hand angles, hand/tick endpoints, and the timer wedge.
//!
//! Nothing here touches a drawing surface. Angles are in radians measured from
//! the +x axis; the renderer rotates the context by −90° so that angle 0 lands
//! on 12 o'clock.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::TAU;

use crate::vector::Vector2;

/// Wall-clock time broken into the components the hands read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl ClockTime {
    #[must_use]
    pub fn new(hours: u32, minutes: u32, seconds: u32, millis: u32) -> Self {
        Self { hours, minutes, seconds, millis }
    }
}

/// Which hand an angle is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

/// Whether hands sweep continuously or jump at whole-unit boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    /// Finer components contribute fractional progress.
    #[default]
    Smooth,
    /// Each hand only reads its own whole unit.
    Stepped,
}

/// Angle of `kind` at `time`, as a fraction of a full turn.
#[must_use]
pub fn hand_angle(kind: HandKind, time: ClockTime, motion: Motion) -> f64 {
    let h = f64::from(time.hours % 12);
    let m = f64::from(time.minutes);
    let s = f64::from(time.seconds);
    let ms = f64::from(time.millis);
    let smooth = motion == Motion::Smooth;

    match kind {
        HandKind::Hour => {
            let frac = if smooth { m / 60.0 + s / 3_600.0 + ms / 3_600_000.0 } else { 0.0 };
            TAU / 12.0 * (h + frac)
        }
        HandKind::Minute => {
            let frac = if smooth { s / 60.0 + ms / 60_000.0 } else { 0.0 };
            TAU / 60.0 * (m + frac)
        }
        HandKind::Second => {
            let frac = if smooth { ms / 1_000.0 } else { 0.0 };
            TAU / 60.0 * (s + frac)
        }
    }
}

/// Start and end of a hand.
///
/// A negative `offset` puts the start on the far side of `center`, which
/// renders as a counterweight tail.
#[must_use]
pub fn hand_vectors(center: Vector2, angle: f64, offset: f64, length: f64) -> (Vector2, Vector2) {
    let dir = Vector2::from_angle(angle);
    (center + dir * offset, center + dir * length)
}

/// Unit direction of tick `index` out of `total`, index 0 on +x.
#[must_use]
pub fn tick_vector(index: u32, total: u32) -> Vector2 {
    Vector2::from_angle(TAU * f64::from(index) / f64::from(total.max(1)))
}

/// Outer (`start`) and inner (`end`) points of a tick along `direction`.
#[must_use]
pub fn tick_endpoints(center: Vector2, direction: Vector2, radius: f64, tick_length: f64) -> (Vector2, Vector2) {
    (center + direction * radius, center + direction * (radius - tick_length))
}

/// Angular extent of the timer wedge, or `None` when no timer is armed.
///
/// The ratio is clamped to `[0, 1]` so the result always lies in `[0, 2π]`.
#[must_use]
pub fn timer_wedge_angle(elapsed_ms: f64, limit_ms: f64) -> Option<f64> {
    if !limit_ms.is_finite() || limit_ms <= 0.0 {
        return None;
    }
    let ratio = (elapsed_ms / limit_ms).clamp(0.0, 1.0);
    Some(ratio * TAU)
}
