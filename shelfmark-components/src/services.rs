//! Talking to the backend and to the browser
//!
//! All requests go to the same origin; the server forwards them to the backend.

use leptos::{prelude::*, wasm_bindgen::JsCast};
use reqwasm::http::Request;
use serde::de::DeserializeOwned;
use shelfmark_shared::{
    actions::ModalAction,
    csrf::{cookie_value, CSRF_COOKIE_NAME, CSRF_HEADER, REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE},
    response::{ActionOutcome, ActionResponse, AuthOutcome, AuthResponse},
    urls::record_element_id,
};
use web_sys::{FormData, HtmlDocument, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request did not get any answer
    Network(String),
    /// The answer had a non-2xx status and no body we understand
    Status(u16),
    /// The body was not the JSON we expected
    Body(String),
    /// The browser did not let us do what we needed
    Browser(String),
}
impl core::fmt::Display for FetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Request failed: {e}"),
            Self::Status(code) => write!(f, "Backend answered with status {code}"),
            Self::Body(e) => write!(f, "Unexpected answer from backend: {e}"),
            Self::Browser(e) => write!(f, "Browser error: {e}"),
        }
    }
}
impl std::error::Error for FetchError {}

/// GET `url` and decode the JSON answer
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let res = Request::get(url)
        .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !res.ok() {
        return Err(FetchError::Status(res.status()));
    }
    res.json::<T>()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))
}

/// POST `form` (or an empty form) to `url` and decode the JSON answer with its status
///
/// The backend answers validation failures with a 4xx status and a JSON body, so the body is
/// decoded regardless of the status. Callers decide what a non-2xx body means.
pub async fn post_form<T: DeserializeOwned>(
    url: &str,
    form: Option<FormData>,
) -> Result<(u16, T), FetchError> {
    let form = match form {
        Some(f) => f,
        None => FormData::new().map_err(|e| FetchError::Browser(format!("{e:?}")))?,
    };
    let mut req = Request::post(url).header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE);
    if let Some(token) = csrf_token() {
        req = req.header(CSRF_HEADER, &token);
    }
    let res = req
        .body(form)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let status = res.status();
    let ok = res.ok();
    match res.json::<T>().await {
        Ok(body) => Ok((status, body)),
        Err(_) if !ok => Err(FetchError::Status(status)),
        Err(e) => Err(FetchError::Body(e.to_string())),
    }
}

/// Post a confirmed modal action
///
/// A failed request is a hard error like a `log_error` from the backend.
pub async fn perform_action(action: &ModalAction, form: Option<FormData>) -> ActionOutcome {
    match post_form::<ActionResponse>(&action.endpoint(), form).await {
        Ok((status, reply)) => ActionOutcome::from_reply(status, reply),
        Err(e) => ActionOutcome::HardError(e.to_string()),
    }
}

pub async fn submit_auth(url: &str, form: Option<FormData>) -> AuthOutcome {
    match post_form::<AuthResponse>(url, form).await {
        Ok((status, reply)) => AuthOutcome::from_reply(status, reply),
        Err(e) => AuthOutcome::HardError(e.to_string()),
    }
}

/// The csrf token the backend left in our cookies
pub fn csrf_token() -> Option<String> {
    let doc = document().dyn_into::<HtmlDocument>().ok()?;
    let cookies = doc.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE_NAME)
}

/// The query string of the current location, without the leading `?`
pub fn current_query_string() -> String {
    window()
        .location()
        .search()
        .map(|s| s.trim_start_matches('?').to_string())
        .unwrap_or_default()
}

pub fn push_history(url: &str) {
    let pushed = window()
        .history()
        .and_then(|h| h.push_state_with_url(&leptos::wasm_bindgen::JsValue::NULL, "", Some(url)));
    if let Err(e) = pushed {
        leptos::logging::warn!("Could not push history entry for {url}: {e:?}");
    }
}

/// Leave the page for `url`
pub fn navigate(url: &str) {
    if let Err(e) = window().location().set_href(url) {
        leptos::logging::error!("Could not navigate to {url}: {e:?}");
    }
}

pub fn reload() {
    if let Err(e) = window().location().reload() {
        leptos::logging::error!("Could not reload the page: {e:?}");
    }
}

/// Smoothly bring the rendered row of a borrow record into view
pub fn scroll_to_record(record_id: i64) {
    let Some(el) = document().get_element_by_id(&record_element_id(record_id)) else {
        leptos::logging::warn!("Record {record_id} is not rendered on this page");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
