//! The 2D drawing surface the renderer draws on.
//!
//! [`Surface`] mirrors the subset of the Canvas 2D API the clock needs, with
//! coordinates as [`Vector2`]. The browser implementation forwards to
//! [`web_sys::CanvasRenderingContext2d`]; tests use a recording double.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::vector::Vector2;

/// Primitive drawing operations and paint state.
pub trait Surface {
    /// Error raised by fallible calls (transforms and arcs).
    type Error;

    fn save(&self);
    fn restore(&self);

    /// Replace the current transform with a pure scale.
    ///
    /// # Errors
    ///
    /// Propagates the underlying surface error.
    fn set_scale(&self, scale: Vector2) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Propagates the underlying surface error.
    fn translate(&self, by: Vector2) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Propagates the underlying surface error.
    fn rotate(&self, angle: f64) -> Result<(), Self::Error>;

    fn clear_rect(&self, origin: Vector2, size: Vector2);

    fn begin_path(&self);
    fn close_path(&self);
    fn move_to(&self, to: Vector2);
    fn line_to(&self, to: Vector2);

    /// # Errors
    ///
    /// Propagates the underlying surface error (e.g. a negative radius).
    fn arc(&self, center: Vector2, radius: f64, start: f64, end: f64, anticlockwise: bool)
    -> Result<(), Self::Error>;

    fn fill(&self);
    fn stroke(&self);

    fn set_fill_style(&self, color: &str);
    fn set_stroke_style(&self, color: &str);
    fn set_line_width(&self, width: f64);
    fn set_shadow_color(&self, color: &str);
    fn set_shadow_blur(&self, blur: f64);
    fn set_shadow_offset(&self, offset: Vector2);
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn save(&self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn set_scale(&self, scale: Vector2) -> Result<(), JsValue> {
        self.set_transform(scale.x, 0.0, 0.0, scale.y, 0.0, 0.0)
    }

    fn translate(&self, by: Vector2) -> Result<(), JsValue> {
        CanvasRenderingContext2d::translate(self, by.x, by.y)
    }

    fn rotate(&self, angle: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::rotate(self, angle)
    }

    fn clear_rect(&self, origin: Vector2, size: Vector2) {
        CanvasRenderingContext2d::clear_rect(self, origin.x, origin.y, size.x, size.y);
    }

    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn close_path(&self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn move_to(&self, to: Vector2) {
        CanvasRenderingContext2d::move_to(self, to.x, to.y);
    }

    fn line_to(&self, to: Vector2) {
        CanvasRenderingContext2d::line_to(self, to.x, to.y);
    }

    fn arc(&self, center: Vector2, radius: f64, start: f64, end: f64, anticlockwise: bool) -> Result<(), JsValue> {
        self.arc_with_anticlockwise(center.x, center.y, radius, start, end, anticlockwise)
    }

    fn fill(&self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn set_fill_style(&self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_stroke_style(&self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_line_width(&self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_shadow_color(&self, color: &str) {
        CanvasRenderingContext2d::set_shadow_color(self, color);
    }

    fn set_shadow_blur(&self, blur: f64) {
        CanvasRenderingContext2d::set_shadow_blur(self, blur);
    }

    fn set_shadow_offset(&self, offset: Vector2) {
        self.set_shadow_offset_x(offset.x);
        self.set_shadow_offset_y(offset.y);
    }
}
