//! Viewport scaling between logical space and the physical canvas.
//!
//! All geometry lives in a fixed logical square. On every resize or
//! pixel-ratio change the canvas backing store is sized to the shorter
//! window side times the pixel ratio, and `scale` maps logical units onto
//! those physical pixels. Pointer input arrives in CSS pixels and is mapped
//! back with the display scale (`scale / pixel_ratio`).

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::vector::Vector2;

/// Sizes to apply to the canvas element after a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    /// Backing-store width and height in device pixels.
    pub physical_px: u32,
    /// On-screen width and height in CSS pixels.
    pub css_px: f64,
}

/// Current mapping from logical units to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    logical_size: Vector2,
    /// Physical pixels per logical unit.
    pub scale: Vector2,
    pub physical_size: Vector2,
    /// Side of the square canvas in CSS pixels.
    pub css_size: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// A 1:1 viewport over `logical_size`, used until the first resize.
    #[must_use]
    pub fn new(logical_size: Vector2) -> Self {
        Self {
            logical_size,
            scale: Vector2::splat(1.0),
            physical_size: logical_size,
            css_size: logical_size.min_element(),
            pixel_ratio: 1.0,
        }
    }

    #[must_use]
    pub fn logical_size(&self) -> Vector2 {
        self.logical_size
    }

    /// Recompute the scale for a window of `width` × `height` CSS pixels.
    ///
    /// The canvas is always square. Non-positive or non-finite inputs are
    /// treated as 1.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&mut self, width: f64, height: f64, pixel_ratio: f64) -> CanvasSize {
        let side = sanitize(width).min(sanitize(height));
        let pixel_ratio = sanitize_ratio(pixel_ratio);
        let physical = (side * pixel_ratio).floor().max(1.0);

        self.css_size = side;
        self.pixel_ratio = pixel_ratio;
        self.physical_size = Vector2::splat(physical);
        self.scale = self.physical_size / self.logical_size;

        CanvasSize { physical_px: physical as u32, css_px: side }
    }

    /// CSS pixels per logical unit.
    #[must_use]
    pub fn display_scale(&self) -> Vector2 {
        Vector2::splat(self.css_size) / self.logical_size
    }

    /// Map a pointer position (CSS pixels, client space) to logical space.
    ///
    /// `element_origin` is the top-left of the canvas element in client space.
    #[must_use]
    pub fn screen_to_logical(&self, client: Vector2, element_origin: Vector2) -> Vector2 {
        (client - element_origin) / self.display_scale()
    }

    /// Map a logical point to client-space CSS pixels.
    #[must_use]
    pub fn logical_to_screen(&self, logical: Vector2, element_origin: Vector2) -> Vector2 {
        logical * self.display_scale() + element_origin
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(1.0) } else { 1.0 }
}

fn sanitize_ratio(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 1.0 }
}
