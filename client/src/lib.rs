//! # landmarks-client
//!
//! Leptos + WASM page for the landmark map. Wraps the browser-free
//! `landmarks` engine with a Google Maps surface, the device geolocation
//! API and the file picker, and renders the form, list and confirm dialog.
//!
//! Browser bindings are compiled only with the `csr` feature; without it the
//! engine runs on a headless map so the state and view helpers can be tested
//! natively.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
