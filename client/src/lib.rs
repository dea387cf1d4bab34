//! # client
//!
//! Leptos + WASM frontend for the Gigboard job board and freelance
//! marketplace. All durable logic lives in the external REST backend; this
//! crate owns presentation, the client-side session lifecycle, and the
//! defensive wire handling the backend's response shapes require.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
