//! Optional drawing attributes for every drawable kind.
//!
//! A field left as `None` means that aspect is not applied. The accessors
//! below document the few places where an absent value has a default.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::Deserialize;

use crate::vector::Vector2;

/// Line width used by the line primitive when none is set.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Stroke color used by the line primitive when none is set.
pub const DEFAULT_STROKE_STYLE: &str = "black";

/// Shadow color when none is set (no visible shadow).
pub const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

/// Drawing attributes for one drawable kind.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StyleSpec {
    /// Radial length (ticks, hands) or radius override (face, wedge).
    pub length: Option<f64>,
    pub line_width: Option<f64>,
    pub stroke_style: Option<String>,
    pub fill_style: Option<String>,
    pub shadow_color: Option<String>,
    pub shadow_blur: Option<f64>,
    pub shadow_offset: Option<Vector2>,
    /// Hands only: distance of the near end from the center along the hand.
    pub offset: Option<f64>,
}

impl StyleSpec {
    /// Fill every field left unset in `self` from `base`.
    #[must_use]
    pub fn merged_over(&self, base: &Self) -> Self {
        Self {
            length: self.length.or(base.length),
            line_width: self.line_width.or(base.line_width),
            stroke_style: self.stroke_style.clone().or_else(|| base.stroke_style.clone()),
            fill_style: self.fill_style.clone().or_else(|| base.fill_style.clone()),
            shadow_color: self.shadow_color.clone().or_else(|| base.shadow_color.clone()),
            shadow_blur: self.shadow_blur.or(base.shadow_blur),
            shadow_offset: self.shadow_offset.or(base.shadow_offset),
            offset: self.offset.or(base.offset),
        }
    }

    /// Same style with every shadow attribute cleared.
    #[must_use]
    pub fn without_shadow(&self) -> Self {
        Self { shadow_color: None, shadow_blur: None, shadow_offset: None, ..self.clone() }
    }

    /// Line width for stroked lines; [`DEFAULT_LINE_WIDTH`] when unset.
    #[must_use]
    pub fn line_width_or_default(&self) -> f64 {
        self.line_width.unwrap_or(DEFAULT_LINE_WIDTH)
    }

    /// Stroke color for lines; [`DEFAULT_STROKE_STYLE`] when unset.
    #[must_use]
    pub fn stroke_style_or_default(&self) -> &str {
        self.stroke_style.as_deref().unwrap_or(DEFAULT_STROKE_STYLE)
    }

    #[must_use]
    pub fn length_or(&self, default: f64) -> f64 {
        self.length.unwrap_or(default)
    }

    /// Hand offset; `0.0` (start at the center) when unset.
    #[must_use]
    pub fn offset_or_zero(&self) -> f64 {
        self.offset.unwrap_or(0.0)
    }

    #[must_use]
    pub fn shadow_color_or_transparent(&self) -> &str {
        self.shadow_color.as_deref().unwrap_or(TRANSPARENT)
    }

    #[must_use]
    pub fn shadow_blur_or_zero(&self) -> f64 {
        self.shadow_blur.unwrap_or(0.0)
    }

    #[must_use]
    pub fn shadow_offset_or_zero(&self) -> Vector2 {
        self.shadow_offset.unwrap_or(Vector2::ZERO)
    }
}
