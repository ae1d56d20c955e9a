//! # client
//!
//! Leptos CSR frontend for Warranty Tracker ("Service Pro").
//!
//! Homeowners register appliances and request service, technicians work their
//! assigned jobs, and administrators dispatch requests and send warranty
//! notices. Session rules, route guards, and the role router come from the
//! `session` crate; this crate wires them to signals, `localStorage`, and the
//! REST API.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console_log init failed: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
