//! datadeck web server and UI.
//!
//! This crate provides the Leptos-based web interface for loading items
//! from third-party integrations and browsing them as cards.

#![allow(non_snake_case)]

pub mod app;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
