//! Post management feature wiring.
//!
//! # Design
//! - Form input stays as strings until save.
//! - HTTP calls are restricted to the `api` module.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
