//! DOM lookups and the small imperative helpers the listeners share.

use std::cell::RefCell;
use std::rc::Rc;

use dial::engine::Engine;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, Window};

use crate::error::HostError;

/// The engine as shared between callbacks.
pub type SharedEngine = Rc<RefCell<Engine>>;

/// Elements the clock is mounted on.
pub struct Mount {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    /// Element that goes fullscreen; the canvas's parent.
    pub container: Element,
    pub ctx: CanvasRenderingContext2d,
}

impl Mount {
    /// Resolve the canvas with id `canvas_id`, its parent, and its 2d context.
    ///
    /// # Errors
    ///
    /// Fails when there is no window/document, the id does not name a
    /// `<canvas>` with a parent, or the 2d context is unavailable.
    pub fn find(canvas_id: &str) -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        let missing = || HostError::ElementNotFound(canvas_id.to_owned());

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(missing)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| missing())?;
        let container = canvas.parent_element().ok_or_else(missing)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(HostError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HostError::NoContext)?;

        Ok(Self { window, document, canvas, container, ctx })
    }
}

/// Read the window's CSS size and pixel ratio and push them to the engine.
///
/// Called before the first frame and again on every resize or pixel-ratio
/// change.
///
/// # Errors
///
/// Returns `Err` if the window size cannot be read or the canvas rejects the
/// new size.
pub fn sync_viewport(window: &Window, engine: &SharedEngine) -> Result<(), HostError> {
    let width = window.inner_width()?.as_f64().unwrap_or(1.0);
    let height = window.inner_height()?.as_f64().unwrap_or(1.0);
    let dpr = window.device_pixel_ratio();
    engine.borrow_mut().set_viewport(width, height, dpr)?;
    Ok(())
}

/// Leave fullscreen if anything is fullscreen, otherwise make `container`
/// fullscreen. Failures are logged and otherwise ignored.
pub fn toggle_fullscreen(document: &Document, container: &Element) {
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
        log::debug!("fullscreen: exit");
        return;
    }
    match container.request_fullscreen() {
        Ok(()) => log::debug!("fullscreen: enter"),
        Err(err) => log::debug!("fullscreen request refused: {err:?}"),
    }
}
