//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - The client's auth header slot is handed to the session manager, which
//!   is the only writer.

use crate::core::config::ApiConfig;
use crate::core::http::AuthHeaderSlot;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a new context for `config` with an empty auth header.
    pub(crate) fn new(config: ApiConfig) -> Self {
        Self {
            client: Rc::new(ApiClient::new(config, AuthHeaderSlot::default())),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
