//! # client
//!
//! Leptos + WASM front end for the agency site.
//!
//! This crate contains pages, components, the reactive bindings around the
//! `presence` session core, and the REST helpers that talk to `server`.
//! Every themed surface reads the online/offline mode from the shared
//! `SessionContext`; none of them keep their own copy of the session flag.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
