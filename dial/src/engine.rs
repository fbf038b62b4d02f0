use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::ClockConfig;
use crate::geometry::ClockTime;
use crate::hit;
use crate::input::{ClickGate, ClickQueue};
use crate::render::{self, Scene};
use crate::surface::Surface;
use crate::timer::{ClickOutcome, TimerPhase, TimerState};
use crate::vector::Vector2;
use crate::viewport::{CanvasSize, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Turns frame timestamps into deltas.
///
/// The first frame has no predecessor and yields zero, as do backwards or
/// non-finite steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    previous_ms: Option<f64>,
}

impl FrameClock {
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let delta = self.previous_ms.map_or(0.0, |prev| now_ms - prev);
        if now_ms.is_finite() {
            self.previous_ms = Some(now_ms);
        }
        if delta.is_finite() && delta > 0.0 { delta } else { 0.0 }
    }
}

/// Clock state that never touches the DOM: viewport, timer, click gate and
/// frame clock. [`Engine`] wraps it together with the canvas.
#[derive(Debug)]
pub struct EngineCore {
    pub config: ClockConfig,
    pub viewport: Viewport,
    pub timer: TimerState,
    pub clicks: ClickGate,
    pub clock: FrameClock,
}

impl EngineCore {
    #[must_use]
    pub fn new(config: ClockConfig) -> Self {
        Self {
            viewport: Viewport::new(config.logical_size),
            clicks: ClickGate::new(config.click_debounce_ms),
            timer: TimerState::default(),
            clock: FrameClock::default(),
            config,
        }
    }

    // --- Viewport ---

    /// Resize for a `width` × `height` CSS-pixel window at `pixel_ratio`.
    pub fn set_viewport(&mut self, width: f64, height: f64, pixel_ratio: f64) -> CanvasSize {
        let size = self.viewport.resize(width, height, pixel_ratio);
        log::debug!(
            "viewport {width}x{height} @{pixel_ratio} -> {}px backing, {}px display",
            size.physical_px,
            size.css_px
        );
        size
    }

    // --- Frames ---

    /// Advance time to `now_ms` and return the delta applied to the timer.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let delta = self.clock.tick(now_ms);
        self.timer.advance(delta);
        delta
    }

    /// Read-only view for the renderer.
    #[must_use]
    pub fn scene(&self, time: ClockTime) -> Scene<'_> {
        Scene { config: &self.config, time, timer: &self.timer, shadow_scale: self.viewport.scale.x }
    }

    // --- Clicks ---

    /// Park a click at `client` (CSS pixels) on a canvas whose top-left is
    /// `element_origin`.
    pub fn press(&mut self, client: Vector2, element_origin: Vector2, now_ms: f64) -> ClickQueue {
        let point = self.viewport.screen_to_logical(client, element_origin);
        self.clicks.press(point, now_ms)
    }

    /// Double-click: drop the latest parked click. Returns whether one was dropped.
    pub fn double_click(&mut self) -> bool {
        self.clicks.double_click()
    }

    /// Act on the parked click identified by `token`, if it is still parked.
    pub fn fire_click(&mut self, token: u64) -> ClickOutcome {
        match self.clicks.fire(token) {
            Some(point) => self.click_at(point),
            None => ClickOutcome::Ignored,
        }
    }

    /// Apply a click at logical `point` immediately.
    pub fn click_at(&mut self, point: Vector2) -> ClickOutcome {
        let hit = hit::hit_marker(&self.config, point);
        self.timer.click(hit.map(|h| h.minutes))
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> TimerPhase {
        self.timer.phase()
    }
}

/// The full clock engine. Wraps `EngineCore` and owns the browser canvas.
#[derive(Debug)]
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine drawing through `ctx` onto `canvas`.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d, config: ClockConfig) -> Self {
        Self { canvas, ctx, core: EngineCore::new(config) }
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    // --- Viewport ---

    /// Resize the canvas backing store and display size, then reapply the
    /// scale transform (resizing a canvas resets its context).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the style or transform cannot be set.
    pub fn set_viewport(&mut self, width: f64, height: f64, pixel_ratio: f64) -> Result<(), JsValue> {
        let size = self.core.set_viewport(width, height, pixel_ratio);
        self.canvas.set_width(size.physical_px);
        self.canvas.set_height(size.physical_px);

        let css = format!("{}px", size.css_px);
        let style = self.canvas.style();
        style.set_property("width", &css)?;
        style.set_property("height", &css)?;

        self.ctx.set_scale(self.core.viewport.scale)
    }

    // --- Frames ---

    /// Advance to `now_ms` and draw the clock showing `time`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self, now_ms: f64, time: ClockTime) -> Result<(), JsValue> {
        self.core.advance(now_ms);
        render::draw(&self.ctx, &self.core.scene(time))
    }

    // --- Delegated input ---

    pub fn press(&mut self, client: Vector2, element_origin: Vector2, now_ms: f64) -> ClickQueue {
        self.core.press(client, element_origin, now_ms)
    }

    pub fn double_click(&mut self) -> bool {
        self.core.double_click()
    }

    pub fn fire_click(&mut self, token: u64) -> ClickOutcome {
        self.core.fire_click(token)
    }
}

/// Local wall-clock time from a JS `Date`.
#[must_use]
pub fn local_time(date: &js_sys::Date) -> ClockTime {
    ClockTime::new(date.get_hours(), date.get_minutes(), date.get_seconds(), date.get_milliseconds())
}
