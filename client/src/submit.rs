use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;

use questpad_shared::{SubmitError, SubmitOutcome, SubmitRequest, SESSION_GONE_REDIRECT};

use crate::dom::alert;
use crate::session::refresh_expiry;

const SUBMIT_FAILED_MESSAGE: &str = "Es gab einen Fehler bei der Verarbeitung ihrer Eingabe";

pub async fn submit_item(
    endpoint: &str,
    request: &SubmitRequest,
) -> Result<SubmitOutcome, SubmitError> {
    let response = Request::post(endpoint)
        .json(request)
        .map_err(|err| SubmitError::Encode(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmitError::Transport(err.to_string()))?;
    Ok(SubmitOutcome::from_status(response.status()))
}

/// Posts in the background. Failures end in an alert, a 410 in a redirect; nothing is retried.
pub fn dispatch(endpoint: String, request: SubmitRequest) {
    spawn_local(async move {
        let item_type = request.item_type;
        let result = submit_item(&endpoint, &request).await;
        let Some(window) = web_sys::window() else {
            return;
        };
        match result {
            Ok(outcome) => {
                // Every answered request rotates the token cookie.
                if let Some(document) = window.document() {
                    if let Err(err) = refresh_expiry(&window, &document) {
                        log::warn!("Session timer not updated: {err:?}");
                    }
                }
                match outcome {
                    SubmitOutcome::Accepted => {
                        log::debug!("Submitted {item_type:?} to {endpoint}");
                    }
                    SubmitOutcome::SessionExpired => {
                        log::info!("Session gone, leaving {endpoint}");
                        if let Err(err) = window.location().replace(SESSION_GONE_REDIRECT) {
                            log::error!("Redirect failed: {err:?}");
                        }
                    }
                }
            }
            Err(err) => {
                log::error!("Submitting {item_type:?} to {endpoint} failed: {err}");
                alert(&window, &format!("{SUBMIT_FAILED_MESSAGE}: {err}"));
            }
        }
    });
}
