use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, HtmlTextAreaElement};

use questpad_shared::naming::{text_response_id, ChoiceIds};
use questpad_shared::SubmitRequest;

use crate::dom::{form_action, get_element};
use crate::submit::dispatch;

/// Free-text item: the whole text is submitted whenever the field commits a change.
pub fn attach_text_item(document: &Document, item_name: &str) -> Result<(), JsValue> {
    let id = text_response_id(item_name);
    let field: HtmlTextAreaElement = get_element(document, &id)?;
    let endpoint = form_action(&id, field.form())?;

    let field_cb = field.clone();
    let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
        dispatch(endpoint.clone(), SubmitRequest::text(field_cb.value()));
    });
    field.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
    onchange.forget();
    Ok(())
}

/// Yes/no item rendered as two checkboxes that behave like a radio pair.
pub fn attach_choice_item(document: &Document, item_name: &str) -> Result<(), JsValue> {
    let ids = ChoiceIds::for_item(item_name);
    let yes: HtmlInputElement = get_element(document, &ids.yes)?;
    let no: HtmlInputElement = get_element(document, &ids.no)?;
    let endpoint = form_action(&ids.yes, yes.form())?;

    for (value, checkbox) in [(true, &yes), (false, &no)] {
        let opposite: HtmlInputElement = get_element(document, ids.opposite(value))?;
        let endpoint = endpoint.clone();
        let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
            opposite.set_checked(false);
            dispatch(endpoint.clone(), SubmitRequest::choice(value));
        });
        checkbox.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }
    Ok(())
}
