//! Bearer token persistence.
//!
//! # Design
//! - Pure persistence: no expiry or validity logic lives here.
//! - Blank values read back as absent so callers only branch on `Option`.
//! - Writes are visible to every reader of the same storage scope; nothing
//!   here listens for writes from other tabs.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Failure while writing the token to durable storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("token storage {operation} failed for `{key}`: {detail}")]
pub struct StorageError {
    /// Storage operation that failed.
    pub operation: &'static str,
    /// Storage key involved.
    pub key: &'static str,
    /// Backend-provided detail.
    pub detail: String,
}

/// Durable home for the session's bearer token.
pub trait TokenStore {
    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backing storage rejects the write.
    fn set(&self, token: &str) -> Result<(), StorageError>;

    /// Read the stored token, treating blank values as absent.
    fn get(&self) -> Option<String>;

    /// Remove the stored token.
    fn clear(&self);
}

/// In-process token store for tests and non-browser hosts.
///
/// Clones share the same slot, so a test can keep one handle while the
/// session manager owns another.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    /// Create a store pre-populated with `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.into()))),
        }
    }

    /// Whether any value (including a blank one) is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.borrow().is_none()
    }
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn get(&self) -> Option<String> {
        normalize(self.slot.borrow().clone())
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

impl fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTokenStore")
            .field("has_token", &!self.is_empty())
            .finish()
    }
}

/// Drop blank tokens so storage quirks never look like a session.
#[must_use]
pub fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|token| !token.trim().is_empty())
}
