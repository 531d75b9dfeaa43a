//! Saby - marketing site, checkout and sign-in for the Saby analytics SaaS
//!
//! Server-rendered with Leptos and hydrated to WebAssembly. Plan data,
//! checkout and auth state machines, validation and animation math live in
//! [`core`] and are framework-free; [`ui`] binds them to the DOM.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
