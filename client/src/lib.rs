//! # client
//!
//! Leptos + WASM frontend for the Meridian Labs site: marketing pages, the
//! chat widget, and the knowledge-base admin screens.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers used to talk to the `server` crate. It compiles in two modes:
//! `ssr` (server-side rendering inside the Axum host) and `hydrate`
//! (browser WASM).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the generated loader after SSR.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
