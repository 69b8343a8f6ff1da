//! The pages of the shelfmark library catalog
//!
//! Rendered on the server and hydrated in the browser; all catalog data comes from the backend
//! through the forwarding routes of `shelfmark_server::forward`.

#![recursion_limit = "256"]

pub mod app;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
