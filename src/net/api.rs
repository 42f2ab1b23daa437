//! `POST /predict` from the browser.
//!
//! Browser (`browser` feature): real request via `gloo-net`.
//!
//! ERROR HANDLING
//! ==============
//! The call never fails outright. Network and body-read errors become
//! [`PredictOutcome::TransportFailed`] so the controller always has something
//! to display and always reaches its completion step.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "browser")]
use super::types::PredictOutcome;

#[cfg(any(test, feature = "browser"))]
fn send_failed_reason(endpoint: &str, detail: &str) -> String {
    format!("request to {endpoint} failed: {detail}")
}

#[cfg(any(test, feature = "browser"))]
fn read_failed_reason(status: u16, detail: &str) -> String {
    format!("reading response body ({status}) failed: {detail}")
}

/// Post the upload form as multipart data and classify the response.
///
/// The body is built from the form itself, so the file travels under the
/// file input's `name` attribute.
#[cfg(feature = "browser")]
pub async fn submit_form(form: &web_sys::HtmlFormElement, endpoint: &str) -> PredictOutcome {
    let form_data = match web_sys::FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => return PredictOutcome::transport(send_failed_reason(endpoint, &format!("{e:?}"))),
    };

    let request = match gloo_net::http::Request::post(endpoint).body(form_data) {
        Ok(request) => request,
        Err(e) => return PredictOutcome::transport(send_failed_reason(endpoint, &e.to_string())),
    };

    log::debug!("posting upload form to {endpoint}");
    let resp = match request.send().await {
        Ok(resp) => resp,
        Err(e) => return PredictOutcome::transport(send_failed_reason(endpoint, &e.to_string())),
    };

    let status = resp.status();
    match resp.text().await {
        Ok(body) => PredictOutcome::from_response(status, &body),
        Err(e) => PredictOutcome::transport(read_failed_reason(status, &e.to_string())),
    }
}
