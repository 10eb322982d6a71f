//! Default request headers and the shared authorization slot.
//!
//! # Design
//! - One slot instance is created per app boot and handed to both the API
//!   client and the session manager, so no module-level globals are needed.
//! - The slot stores the full header value (`Bearer <token>`).

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// `Accept` header name.
pub const ACCEPT: &str = "Accept";
/// `Content-Type` header name.
pub const CONTENT_TYPE: &str = "Content-Type";
/// `Authorization` header name.
pub const AUTHORIZATION: &str = "Authorization";
/// JSON media type.
pub const APPLICATION_JSON: &str = "application/json";

/// Mutable default `Authorization` header shared by client and session.
#[derive(Clone, Default)]
pub struct AuthHeaderSlot {
    value: Rc<RefCell<Option<String>>>,
}

impl AuthHeaderSlot {
    /// Set the header to `Bearer <token>`.
    pub fn set_bearer(&self, token: &str) {
        *self.value.borrow_mut() = Some(format!("Bearer {token}"));
    }

    /// Remove the header.
    pub fn clear(&self) {
        self.value.borrow_mut().take();
    }

    /// Current header value, if set.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    /// Whether requests currently carry an authorization header.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value.borrow().is_some()
    }
}

impl PartialEq for AuthHeaderSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for AuthHeaderSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHeaderSlot")
            .field("set", &self.is_set())
            .finish()
    }
}

/// Headers attached to every outbound request.
#[must_use]
pub fn default_headers(auth: &AuthHeaderSlot) -> Vec<(&'static str, String)> {
    let mut headers = vec![
        (ACCEPT, APPLICATION_JSON.to_string()),
        (CONTENT_TYPE, APPLICATION_JSON.to_string()),
    ];
    if let Some(value) = auth.get() {
        headers.push((AUTHORIZATION, value));
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_requests_carry_json_headers_only() {
        let headers = default_headers(&AuthHeaderSlot::default());
        assert_eq!(
            headers,
            vec![
                (ACCEPT, APPLICATION_JSON.to_string()),
                (CONTENT_TYPE, APPLICATION_JSON.to_string()),
            ]
        );
    }

    #[test]
    fn bearer_header_follows_the_slot() {
        let slot = AuthHeaderSlot::default();
        let client_view = slot.clone();
        slot.set_bearer("abc");
        let headers = default_headers(&client_view);
        assert!(headers.contains(&(AUTHORIZATION, "Bearer abc".to_string())));
        slot.clear();
        assert!(!client_view.is_set());
        assert_eq!(default_headers(&client_view).len(), 2);
    }

    #[test]
    fn slots_compare_by_identity() {
        let slot = AuthHeaderSlot::default();
        assert_eq!(slot, slot.clone());
        assert_ne!(slot, AuthHeaderSlot::default());
    }
}
