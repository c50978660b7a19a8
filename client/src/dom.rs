use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument, HtmlElement, HtmlFormElement, Window};

use questpad_shared::Rect;

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

/// Lookup for page furniture that some pages simply do not render.
pub fn find_element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub fn form_action(id: &str, form: Option<HtmlFormElement>) -> Result<String, JsValue> {
    let form = form.ok_or_else(|| JsValue::from_str(&format!("Element is not in a form: {id}")))?;
    Ok(form.action())
}

pub fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn document_cookies(document: &Document) -> Result<String, JsValue> {
    document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| JsValue::from_str("Document has no cookie access"))?
        .cookie()
}

pub fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1") || search.contains("debug=true")
}

pub fn alert(window: &Window, message: &str) {
    if window.alert_with_message(message).is_err() {
        log::error!("{message}");
    }
}
