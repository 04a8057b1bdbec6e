//! Drone Temperature Dashboard - Leptos frontend
//!
//! Client-side UI for a drone temperature-logging service: a configuration
//! view, a submission form, and a paginated history list. All business logic
//! lives in the remote API; this crate fetches, caches, and renders.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod io;
pub mod pagination;
pub mod store;

pub use app::App;
pub use error::{DashboardError, Result};

/// Browser entry point for the WASM client
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    leptos::mount::mount_to_body(App);
}
