//! The `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::rc::Rc;

use dial::engine::local_time;
use js_sys::Date;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::dom::SharedEngine;
use crate::error::HostError;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Start drawing every display refresh, forever.
///
/// The callback owns a handle to its own slot so it can reschedule itself;
/// the resulting cycle keeps it alive for the life of the page. A frame that
/// fails to draw is logged and skipped; the loop keeps going.
///
/// # Errors
///
/// Returns `Err` if the first frame cannot be scheduled.
pub fn start(window: &Window, engine: SharedEngine) -> Result<(), HostError> {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let slot_for_cb = Rc::clone(&slot);
    let target = window.clone();

    let cb = Closure::wrap(Box::new(move |now_ms: f64| {
        let time = local_time(&Date::new_0());
        if let Err(err) = engine.borrow_mut().frame(now_ms, time) {
            log::warn!("frame dropped: {err:?}");
        }
        if let Some(next) = slot_for_cb.borrow().as_ref() {
            if let Err(err) = target.request_animation_frame(next.as_ref().unchecked_ref()) {
                log::error!("frame loop stopped: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>);

    window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    *slot.borrow_mut() = Some(cb);
    Ok(())
}
