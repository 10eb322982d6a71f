//! Feature slices, one per backend resource.
//!
//! Each slice keeps DOM-free state and validation in `state`/`kinds` modules
//! and its HTTP calls in a wasm-only `api` module.

pub mod auth;
pub mod catalog;
pub mod posts;
pub mod users;
