//! Page furniture shared by the server-rendered pages: theme switch,
//! cookie-consent banner, sidebar hover, the questionnaire's item pills and
//! the account page's deletion guard.
//!
//! Pages render only some of these elements, so each piece quietly does
//! nothing when its element is missing.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use questpad_shared::confirm::{DeleteButton, ARIA_DISABLED_ATTRIBUTE, DISABLED_CLASS};
use questpad_shared::naming::{
    ACTIVE_CLASS, CONFIRM_DELETION_ID, COOKIE_BANNER_ID, DELETE_BUTTON_ID, MODE_TOGGLER_ID,
    SCROLL_PILL_CLASS, SIDE_LINK_CLASS,
};
use questpad_shared::session::{cookie_value, CONSENT_COOKIE, CONSENT_GIVEN};
use questpad_shared::theme::{Theme, DARK_SCHEME_QUERY, THEME_ATTRIBUTE, THEME_STORAGE_KEY};

use crate::dom::{document_cookies, find_element};

const HIDDEN_CLASS: &str = "d-none";

fn stored_theme(window: &Window) -> Option<String> {
    window
        .session_storage()
        .ok()??
        .get_item(THEME_STORAGE_KEY)
        .ok()?
}

fn system_prefers_dark(window: &Window) -> bool {
    window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map_or(false, |query| query.matches())
}

pub fn preferred_theme(window: &Window) -> Theme {
    Theme::preferred(stored_theme(window).as_deref(), system_prefers_dark(window))
}

pub fn current_theme(document: &Document) -> Option<Theme> {
    document
        .document_element()?
        .get_attribute(THEME_ATTRIBUTE)
        .as_deref()
        .and_then(Theme::parse)
}

pub fn apply_theme(document: &Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

pub fn bind_theme_toggler(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(toggler) = find_element::<HtmlInputElement>(document, MODE_TOGGLER_ID) else {
        return Ok(());
    };
    if let Some(theme) = current_theme(document) {
        toggler.set_checked(theme.is_dark());
    }

    let window = window.clone();
    let document = document.clone();
    let toggler_cb = toggler.clone();
    let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
        let theme = Theme::from_toggle(toggler_cb.checked());
        apply_theme(&document, theme);
        if let Ok(Some(storage)) = window.session_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
        log::debug!("Theme switched to {}", theme.as_str());
    });
    toggler.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
    onchange.forget();
    Ok(())
}

pub fn hide_consented_banner(document: &Document) {
    let Some(banner) = document.get_element_by_id(COOKIE_BANNER_ID) else {
        return;
    };
    let consent = document_cookies(document)
        .ok()
        .and_then(|cookies| cookie_value(&cookies, CONSENT_COOKIE));
    if consent.as_deref() == Some(CONSENT_GIVEN) {
        let _ = banner.class_list().add_1(HIDDEN_CLASS);
    }
}

fn elements_with_class(document: &Document, class: &str) -> Vec<HtmlElement> {
    let elements = document.get_elements_by_class_name(class);
    (0..elements.length())
        .filter_map(|index| elements.item(index))
        .filter_map(|element: Element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Links that are already active keep their state; the others light up while hovered.
pub fn bind_sidebar_hover(document: &Document) -> Result<(), JsValue> {
    for link in elements_with_class(document, SIDE_LINK_CLASS) {
        if link.class_list().contains(ACTIVE_CLASS) {
            continue;
        }

        let link_over = link.clone();
        let onover = Closure::<dyn FnMut(Event)>::new(move |_| {
            let _ = link_over.class_list().add_1(ACTIVE_CLASS);
        });
        link.add_event_listener_with_callback("mouseover", onover.as_ref().unchecked_ref())?;
        onover.forget();

        let link_out = link.clone();
        let onout = Closure::<dyn FnMut(Event)>::new(move |_| {
            let _ = link_out.class_list().remove_1(ACTIVE_CLASS);
        });
        link.add_event_listener_with_callback("mouseout", onout.as_ref().unchecked_ref())?;
        onout.forget();
    }
    Ok(())
}

/// Centers the pill of the current item in the questionnaire's item strip.
pub fn scroll_active_pill(document: &Document) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Instant);
    options.set_block(ScrollLogicalPosition::Center);
    options.set_inline(ScrollLogicalPosition::Center);
    for pill in elements_with_class(document, SCROLL_PILL_CLASS) {
        if pill.class_list().contains(ACTIVE_CLASS) {
            pill.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

fn sync_delete_button(button: &Element, confirmed: bool) {
    let state = DeleteButton::for_confirmation(confirmed);
    let classes = button.class_list();
    let _ = if state.is_disabled() {
        classes.add_1(DISABLED_CLASS)
    } else {
        classes.remove_1(DISABLED_CLASS)
    };
    let _ = button.set_attribute(ARIA_DISABLED_ATTRIBUTE, state.aria_disabled());
}

/// The confirmation box starts unticked on every load, which locks the button.
pub fn bind_deletion_confirm(document: &Document) -> Result<(), JsValue> {
    let Some(checkbox) = find_element::<HtmlInputElement>(document, CONFIRM_DELETION_ID) else {
        return Ok(());
    };
    let Some(button) = document.get_element_by_id(DELETE_BUTTON_ID) else {
        return Ok(());
    };
    checkbox.set_checked(false);
    sync_delete_button(&button, false);

    let checkbox_cb = checkbox.clone();
    let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
        sync_delete_button(&button, checkbox_cb.checked());
    });
    checkbox.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
    onchange.forget();
    Ok(())
}
