//! Static configuration fixed at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{CLICK_DEBOUNCE_MS, FACE_RADIUS_RATIO, LOGICAL_SIZE, MAJOR_TICK_EVERY, TICK_COUNT, TICK_INSET};
use crate::geometry::Motion;
use crate::theme::{Theme, ThemeError};
use crate::vector::Vector2;

/// Everything the engine needs that never changes after startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    /// Size of the logical drawing space; all geometry is expressed in it.
    pub logical_size: Vector2,
    pub motion: Motion,
    pub tick_count: u32,
    pub major_every: u32,
    pub click_debounce_ms: u32,
    pub theme: Theme,
}

impl ClockConfig {
    /// Default configuration with the builtin theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] if the embedded theme does not load.
    pub fn builtin() -> Result<Self, ThemeError> {
        Ok(Self::with_theme(Theme::builtin()?))
    }

    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            logical_size: Vector2::splat(LOGICAL_SIZE),
            motion: Motion::Smooth,
            tick_count: TICK_COUNT,
            major_every: MAJOR_TICK_EVERY,
            click_debounce_ms: CLICK_DEBOUNCE_MS,
            theme,
        }
    }

    /// Center of the dial in logical space.
    #[must_use]
    pub fn center(&self) -> Vector2 {
        self.logical_size / 2.0
    }

    /// Radius of the clock face in logical units.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.logical_size.min_element() / 2.0 * FACE_RADIUS_RATIO
    }

    /// Distance from the center to the outer end of every tick.
    #[must_use]
    pub fn tick_radius(&self) -> f64 {
        self.radius() - TICK_INSET
    }
}
