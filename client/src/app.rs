use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, Window};

use crate::chrome::{
    apply_theme, bind_deletion_confirm, bind_sidebar_hover, bind_theme_toggler,
    hide_consented_banner, preferred_theme, scroll_active_pill,
};
use crate::dom::debug_enabled;
use crate::items::{attach_choice_item, attach_text_item};
use crate::session::start_timer;
use crate::surface;

fn window_and_document() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    Ok((window, document))
}

fn init_logging(window: &Window) {
    let level = if debug_enabled(window) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // A second wasm instance on the page already owns the logger; keep using it.
    let _ = console_log::init_with_level(level);
}

fn report(result: Result<(), JsValue>, what: &str) -> Result<(), JsValue> {
    if let Err(err) = &result {
        log::error!("{what} failed: {err:?}");
    }
    result
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let (window, document) = window_and_document()?;
    init_logging(&window);
    // Before first paint, so the page does not flash the wrong theme.
    apply_theme(&document, preferred_theme(&window));

    let started = Rc::new(Cell::new(false));
    if document.ready_state() == "complete" {
        started.set(true);
        return start_page(&window, &document);
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        let result = window_and_document()
            .and_then(|(window, document)| start_page(&window, &document));
        if let Err(err) = result {
            log::error!("Page start failed: {err:?}");
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

fn start_page(window: &Window, document: &Document) -> Result<(), JsValue> {
    bind_theme_toggler(window, document)?;
    hide_consented_banner(document);
    start_timer(window, document);
    bind_sidebar_hover(document)?;
    scroll_active_pill(document);
    bind_deletion_confirm(document)?;
    log::debug!("Page behavior attached");
    Ok(())
}

/// Attaches the drawing widget of item `item_name` (`<item>-canvas`, `<item>-clear`, ...).
#[wasm_bindgen(js_name = initDrawingSurface)]
pub fn init_drawing_surface(item_name: &str) -> Result<(), JsValue> {
    let (_, document) = window_and_document()?;
    report(
        surface::attach(&document, item_name),
        &format!("Drawing surface {item_name}"),
    )
}

#[wasm_bindgen(js_name = initTextItem)]
pub fn init_text_item(item_name: &str) -> Result<(), JsValue> {
    let (_, document) = window_and_document()?;
    report(
        attach_text_item(&document, item_name),
        &format!("Text item {item_name}"),
    )
}

#[wasm_bindgen(js_name = initChoiceItem)]
pub fn init_choice_item(item_name: &str) -> Result<(), JsValue> {
    let (_, document) = window_and_document()?;
    report(
        attach_choice_item(&document, item_name),
        &format!("Choice item {item_name}"),
    )
}
