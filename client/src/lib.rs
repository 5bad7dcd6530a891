//! # client
//!
//! Leptos + WASM frontend for the HFurniture storefront.
//!
//! This crate contains the storefront pages, the shared UI kit, the product
//! and favourites state, the `localStorage` bridge, and the product fetch
//! helpers. The server crate renders it via SSR; the `hydrate` feature builds
//! the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
