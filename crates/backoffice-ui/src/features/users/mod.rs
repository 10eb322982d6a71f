//! User administration feature wiring.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
