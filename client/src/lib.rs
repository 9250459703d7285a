//! # client
//!
//! Leptos + WASM browser host for the duotone label tool.
//!
//! The host-independent pieces (settings, file-safe titles, the export
//! pipeline) live in the `duotone` crate. This crate provides them to the
//! component tree through Leptos context and implements the export surfaces
//! against the live document: `querySelector("#svg")`, an offscreen canvas,
//! and anchor-click downloads.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
