//! # client
//!
//! Leptos frontend for a scroll-driven wedding invitation. Pages render on
//! the server and hydrate in the browser, where intersection observers and
//! timers drive the reveal animations, the floating nav, and the gallery.
//!
//! Behavior lives in `state` as plain structs with unit tests; `components`
//! bind that state to the DOM.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: hydrates the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
