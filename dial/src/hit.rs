//! Hit-testing clicks against the dial's tick markers.
//!
//! Markers are numbered clockwise from 12 o'clock in screen space. Each one
//! selects a timer duration that decreases clockwise: index 0 is the longest
//! duration and the marker just counter-clockwise of 12 is the shortest.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::config::ClockConfig;
use crate::consts::MAX_TIMER_MINUTES;
use crate::geometry::tick_endpoints;
use crate::vector::Vector2;

/// A marker under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerHit {
    pub index: u32,
    pub minutes: u32,
}

/// Timer duration selected by marker `index` out of `total`.
#[must_use]
pub fn marker_minutes(index: u32, total: u32) -> u32 {
    let total = total.max(1);
    MAX_TIMER_MINUTES - (index % total) * MAX_TIMER_MINUTES / total
}

/// Unit direction of marker `index` in screen orientation (index 0 up).
#[must_use]
pub fn marker_direction(index: u32, total: u32) -> Vector2 {
    Vector2::from_angle(TAU * f64::from(index) / f64::from(total.max(1)) - FRAC_PI_2)
}

/// Logical position a marker is rendered at: the midpoint of its tick.
#[must_use]
pub fn marker_position(config: &ClockConfig, index: u32) -> Vector2 {
    let length = config.theme.tick(index, config.major_every).length_or(0.0);
    let dir = marker_direction(index, config.tick_count);
    let (start, end) = tick_endpoints(config.center(), dir, config.tick_radius(), length);
    (start + end) / 2.0
}

/// First marker whose rendered position is within half its length of `point`.
///
/// Scans in ascending index order.
#[must_use]
pub fn hit_marker(config: &ClockConfig, point: Vector2) -> Option<MarkerHit> {
    (0..config.tick_count).find_map(|index| {
        let reach = config.theme.tick(index, config.major_every).length_or(0.0) / 2.0;
        if point.distance_from(marker_position(config, index)) < reach {
            Some(MarkerHit { index, minutes: marker_minutes(index, config.tick_count) })
        } else {
            None
        }
    })
}
