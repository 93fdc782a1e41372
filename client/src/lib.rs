//! StayFinder browser front end: listing wizard, host dashboard, booking
//! confirmation.
//!
//! ARCHITECTURE
//! ============
//! Domain state lives in the `marketplace` crate as plain values. This crate
//! wraps those values in `RwSignal`s, renders them with Leptos, and performs
//! the browser-side HTTP calls in `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
