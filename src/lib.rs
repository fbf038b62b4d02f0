//! Browser host for the `dial` clock.
//!
//! Mounts the clock onto `<canvas id="clock">`, fits it to the window, wires
//! clicks (arm/reset the countdown) and double-clicks (fullscreen), and runs
//! the frame loop. All clock logic lives in `dial`; this crate is glue.
//!
//! | Module | Role |
//! |--------|------|
//! | `dom` | Element lookup, viewport sync, fullscreen toggle |
//! | `listeners` | Resize, pixel-ratio, click and double-click wiring |
//! | `frame_loop` | `requestAnimationFrame` driver |
//! | [`error`] | [`HostError`] |

pub mod error;

mod dom;
mod frame_loop;
mod listeners;

use std::cell::RefCell;
use std::rc::Rc;

use dial::config::ClockConfig;
use dial::engine::Engine;
use wasm_bindgen::prelude::*;

pub use error::HostError;

/// Id of the canvas element the clock draws on.
pub const CANVAS_ID: &str = "clock";

/// WASM entry point.
///
/// # Errors
///
/// Returns `Err` (a string naming the [`HostError`]) if the clock cannot be
/// mounted.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();
    mount(CANVAS_ID).map_err(|err| {
        log::error!("clock not mounted: {err}");
        JsValue::from(err)
    })
}

fn init_logging() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("console logger already installed: {err}");
    }
}

/// Mount the clock on the canvas with id `canvas_id` and start it.
///
/// # Errors
///
/// Returns `Err` if the page lacks the canvas, the theme is invalid, or any
/// listener cannot be registered.
pub fn mount(canvas_id: &str) -> Result<(), HostError> {
    let dom::Mount { window, document, canvas, container, ctx } = dom::Mount::find(canvas_id)?;
    let config = ClockConfig::builtin()?;
    let engine: dom::SharedEngine = Rc::new(RefCell::new(Engine::new(canvas, ctx, config)));

    // Size before the first frame so it draws at the right scale.
    dom::sync_viewport(&window, &engine)?;

    listeners::on_resize(&window, &engine)?;
    listeners::on_pixel_ratio_change(&window, &engine)?;
    listeners::on_click(&engine)?;
    listeners::on_double_click(&document, &container, &engine)?;
    frame_loop::start(&window, engine)?;

    log::info!("clock mounted on #{canvas_id}");
    Ok(())
}
