//! NEXUS Fitness - single-page marketing site
//!
//! A scroll- and pointer-reactive landing page for the NEXUS fitness club,
//! built with Leptos and WebAssembly. Pure interaction state lives in
//! [`core`]; [`ui`] binds it to the browser.

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
