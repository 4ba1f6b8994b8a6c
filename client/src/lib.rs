//! # admin-client
//!
//! Leptos + WASM admin dashboard for a personal site: log in, edit the
//! homepage hero text, manage the photo gallery and background music.
//!
//! All data lives behind a remote REST API. The browser only holds the
//! bearer token (in `sessionStorage`) and whatever the current page last
//! loaded.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
