//! Catalog content collections (advantages, pricing, Q&A, ...).
//!
//! # Design
//! - Every collection shares the generic entity container; this slice only
//!   declares the kinds and the fetch-then-replace loader.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod kinds;
pub mod loader;
