//! LocalStorage-backed token store.

use crate::core::config::ACCESS_TOKEN_KEY;
use crate::core::token::{StorageError, TokenStore, normalize};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// Persists the bearer token in `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn set(&self, token: &str) -> Result<(), StorageError> {
        LocalStorage::set(ACCESS_TOKEN_KEY, token).map_err(|err| {
            let detail = err.to_string();
            console::error!("storage operation failed", "set", ACCESS_TOKEN_KEY, detail.as_str());
            StorageError {
                operation: "set",
                key: ACCESS_TOKEN_KEY,
                detail,
            }
        })
    }

    fn get(&self) -> Option<String> {
        normalize(LocalStorage::get::<String>(ACCESS_TOKEN_KEY).ok())
    }

    fn clear(&self) {
        LocalStorage::delete(ACCESS_TOKEN_KEY);
    }
}
