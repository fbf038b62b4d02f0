//! DOM event wiring.
//!
//! Every listener lives as long as the page, so closures are leaked with
//! `forget()` once registered. The pixel-ratio watcher is the exception: it
//! registers a one-shot listener and re-arms itself for the new ratio.

use std::rc::Rc;

use dial::input::ClickQueue;
use dial::vector::Vector2;
use gloo_timers::callback::Timeout;
use js_sys::Date;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, MouseEvent, Window};

use crate::dom::{self, SharedEngine};
use crate::error::HostError;

/// Re-fit the canvas whenever the window is resized.
///
/// # Errors
///
/// Returns `Err` if the listener cannot be registered.
pub fn on_resize(window: &Window, engine: &SharedEngine) -> Result<(), HostError> {
    let target = window.clone();
    let engine = Rc::clone(engine);
    let onresize = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
        if let Err(err) = dom::sync_viewport(&target, &engine) {
            log::warn!("resize: {err}");
        }
    }));
    window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
    onresize.forget();
    Ok(())
}

/// Re-fit the canvas when the device pixel ratio changes (zoom, or moving
/// the window to another display).
///
/// A `(resolution: Ndppx)` media query only matches the ratio it was built
/// for, so each change registers a fresh query for the new ratio.
///
/// # Errors
///
/// Returns `Err` if the query or its listener cannot be registered.
pub fn on_pixel_ratio_change(window: &Window, engine: &SharedEngine) -> Result<(), HostError> {
    let dpr = window.device_pixel_ratio();
    let Some(query) = window.match_media(&format!("(resolution: {dpr}dppx)"))? else {
        log::debug!("matchMedia unavailable; pixel ratio changes wait for a resize");
        return Ok(());
    };

    let target = window.clone();
    let engine = Rc::clone(engine);
    let onchange = Closure::once_into_js(move |_e: Event| {
        log::debug!("pixel ratio changed from {dpr}");
        if let Err(err) = dom::sync_viewport(&target, &engine) {
            log::warn!("pixel ratio: {err}");
        }
        if let Err(err) = on_pixel_ratio_change(&target, &engine) {
            log::warn!("pixel ratio watch not re-armed: {err}");
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    query.add_event_listener_with_callback_and_add_event_listener_options(
        "change",
        onchange.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

/// Single clicks on the canvas are parked and resolved after the debounce
/// window unless a second click or a double-click cancels them first.
///
/// # Errors
///
/// Returns `Err` if the listener cannot be registered.
pub fn on_click(engine: &SharedEngine) -> Result<(), HostError> {
    let (canvas, delay_ms) = {
        let engine = engine.borrow();
        (engine.canvas().clone(), engine.core.config.click_debounce_ms)
    };

    let target = canvas.clone();
    let engine = Rc::clone(engine);
    let onclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
        let rect = target.get_bounding_client_rect();
        let client = Vector2::new(f64::from(e.client_x()), f64::from(e.client_y()));
        let origin = Vector2::new(rect.left(), rect.top());

        let queued = engine.borrow_mut().press(client, origin, Date::now());
        if let ClickQueue::Queued(token) = queued {
            let engine = Rc::clone(&engine);
            Timeout::new(delay_ms, move || {
                let outcome = engine.borrow_mut().fire_click(token);
                log::debug!("click {token}: {outcome:?}");
            })
            .forget();
        }
    }));
    canvas.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}

/// Double-click drops any parked click and toggles fullscreen on `container`.
///
/// # Errors
///
/// Returns `Err` if the listener cannot be registered.
pub fn on_double_click(document: &Document, container: &Element, engine: &SharedEngine) -> Result<(), HostError> {
    let canvas = engine.borrow().canvas().clone();
    let document = document.clone();
    let container = container.clone();
    let engine = Rc::clone(engine);
    let ondblclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
        if engine.borrow_mut().double_click() {
            log::debug!("double-click cancelled a pending click");
        }
        dom::toggle_fullscreen(&document, &container);
    }));
    canvas.add_event_listener_with_callback("dblclick", ondblclick.as_ref().unchecked_ref())?;
    ondblclick.forget();
    Ok(())
}
