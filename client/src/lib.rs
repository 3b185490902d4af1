//! # portfolio-client
//!
//! Leptos + WASM frontend for the personal portfolio page.
//!
//! This crate contains the page shell, section components, UI state, and the
//! browser helpers for theme persistence, smooth scrolling, and the skill bar
//! reveal animation. The root `portfolio` server renders it with SSR and the
//! `hydrate` build takes over in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
