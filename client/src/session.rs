use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage, Window};

use questpad_shared::naming::TIMER_BANNER_ID;
use questpad_shared::session::{
    cookie_value, token_expiry_ms, Countdown, EXPIRY_STORAGE_KEY, TICK_MS, TOKEN_COOKIE,
};

use crate::dom::document_cookies;

fn session_storage(window: &Window) -> Result<Storage, JsValue> {
    window
        .session_storage()?
        .ok_or_else(|| JsValue::from_str("Missing sessionStorage"))
}

/// Re-reads the token cookie and stores its expiry for the ticking banner.
pub fn refresh_expiry(window: &Window, document: &Document) -> Result<(), JsValue> {
    let cookies = document_cookies(document)?;
    let token = cookie_value(&cookies, TOKEN_COOKIE)
        .ok_or_else(|| JsValue::from_str("Missing access token cookie"))?;
    let expiry = token_expiry_ms(&token).map_err(|err| JsValue::from_str(&err.to_string()))?;
    session_storage(window)?.set_item(EXPIRY_STORAGE_KEY, &expiry.to_string())
}

fn stored_expiry(window: &Window) -> Option<f64> {
    session_storage(window)
        .ok()?
        .get_item(EXPIRY_STORAGE_KEY)
        .ok()??
        .parse()
        .ok()
}

pub fn start_timer(window: &Window, document: &Document) {
    let Some(banner) = document.get_element_by_id(TIMER_BANNER_ID) else {
        return;
    };
    if let Err(err) = refresh_expiry(window, document) {
        log::debug!("No session timer: {err:?}");
        return;
    }
    if !tick(window, &banner) {
        return;
    }

    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let window = window.clone();
    let slot_cb = slot.clone();
    let interval = Interval::new(TICK_MS, move || {
        if !tick(&window, &banner) {
            // Dropping the running interval is fine: wasm-bindgen frees the
            // callback only after it returns.
            slot_cb.borrow_mut().take();
        }
    });
    *slot.borrow_mut() = Some(interval);
}

/// Renders the remaining time; `false` once the session has run out.
fn tick(window: &Window, banner: &Element) -> bool {
    let Some(expiry) = stored_expiry(window) else {
        return false;
    };
    let countdown = Countdown::at(expiry, js_sys::Date::now());
    banner.set_text_content(Some(countdown.text()));
    countdown.is_running()
}
