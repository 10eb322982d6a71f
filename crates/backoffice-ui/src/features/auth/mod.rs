//! Sign-in feature wiring.
//!
//! # Design
//! - The repository returns the backend body untouched; `logic` decides what
//!   a sign-in response means for the session.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
