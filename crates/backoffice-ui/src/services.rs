//! Browser-backed implementations of the core traits plus the HTTP client.

pub(crate) mod api;
pub(crate) mod storage;
pub(crate) mod timer;
