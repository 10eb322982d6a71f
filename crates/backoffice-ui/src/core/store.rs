//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep session-derived UI state in one store to avoid ad-hoc contexts.
//! - The session manager is the source of truth; this slice mirrors its
//!   events for rendering.

use crate::core::auth::SessionStatus;
use crate::core::session::SessionEvent;
use backoffice_api_models::User;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Authentication state.
    pub auth: AuthSlice,
}

/// Shared authentication state for the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSlice {
    /// Mirrored session status.
    pub status: SessionStatus,
    /// Signed-in user, once looked up.
    pub user: Option<User>,
    /// Banner explaining the last session change.
    pub notice: Option<SessionNotice>,
}

/// User-facing reason the session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionNotice {
    /// The token expired or failed validation.
    Expired,
    /// The user signed out.
    SignedOut,
}

impl SessionNotice {
    /// Banner copy.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Expired => "Your session has expired. Please sign in again.",
            Self::SignedOut => "You have been signed out.",
        }
    }
}

/// Mirror a session event into the store.
pub fn apply_session_event(store: &mut AppStore, event: SessionEvent) {
    match event {
        SessionEvent::Established { expires_at } => {
            store.auth.status = SessionStatus::Active { expires_at };
            store.auth.notice = None;
        }
        SessionEvent::Terminated => {
            store.auth = AuthSlice {
                notice: Some(SessionNotice::SignedOut),
                ..AuthSlice::default()
            };
        }
        SessionEvent::Expired => {
            store.auth = AuthSlice {
                notice: Some(SessionNotice::Expired),
                ..AuthSlice::default()
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user() -> User {
        User {
            id: 1,
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            role: None,
        }
    }

    #[test]
    fn establish_activates_and_clears_notice() {
        let expires_at = Utc.timestamp_opt(2_000_000_000, 0).single().expect("timestamp");
        let mut store = AppStore::default();
        store.auth.notice = Some(SessionNotice::Expired);
        apply_session_event(&mut store, SessionEvent::Established { expires_at });
        assert_eq!(store.auth.status, SessionStatus::Active { expires_at });
        assert_eq!(store.auth.notice, None);
    }

    #[test]
    fn expiry_drops_user_and_sets_notice() {
        let mut store = AppStore::default();
        store.auth.user = Some(user());
        apply_session_event(&mut store, SessionEvent::Expired);
        assert_eq!(store.auth.status, SessionStatus::Anonymous);
        assert_eq!(store.auth.user, None);
        assert_eq!(store.auth.notice, Some(SessionNotice::Expired));
    }

    #[test]
    fn sign_out_sets_its_own_notice() {
        let mut store = AppStore::default();
        store.auth.user = Some(user());
        apply_session_event(&mut store, SessionEvent::Terminated);
        assert_eq!(store.auth.notice, Some(SessionNotice::SignedOut));
        assert_ne!(
            SessionNotice::SignedOut.message(),
            SessionNotice::Expired.message()
        );
    }
}
