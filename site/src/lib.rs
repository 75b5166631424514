//! # site
//!
//! Leptos frontend for the Dr. Gari surgeon portfolio.
//!
//! This crate contains the content record, the page sections, the UI state
//! machines (loader, contact form, carousel, FAQ, typing effect), and the
//! browser helpers they lean on. It is compiled twice: with `ssr` into the
//! `drgari` server binary and with `hydrate` into the WASM bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
