//! # letter-drive
//!
//! Leptos + WASM frontend for the Letter Drive application.
//!
//! This crate contains pages, components, session and page state, the REST
//! API layer, and the browser glue (token storage, clock, navigation) that
//! ties them together. Browser-only code is compiled with the `csr` feature;
//! everything else builds and tests on the native target.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and logger, then mounts the
/// root [`app::App`] component onto `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    log::info!("letter-drive starting; api base = {:?}", config::ClientConfig::from_build_env().api_base_url());
    leptos::mount::mount_to_body(app::App);
}
