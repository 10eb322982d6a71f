//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod config;
pub mod endpoints;
pub mod entity;
pub mod http;
pub mod session;
pub mod store;
pub mod timer;
pub mod token;
