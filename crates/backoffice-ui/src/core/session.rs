//! Client-side session lifecycle.
//!
//! # Design
//! - The manager owns the token store, the shared auth header slot, and at
//!   most one expiry timer; replacing the timer handle cancels the old one.
//! - The live token is held in memory; storage only seeds `restore` and
//!   fills in when no session is held, so a failed write never ends a
//!   session early.
//! - Every armed timer carries a generation number so a superseded timer is
//!   a no-op even if the scheduler still runs it.
//! - Expiry is reported through [`SessionEvent::Expired`]; navigation belongs
//!   to whoever listens.
//! - Expiry enforcement is a UX convenience. The backend stays the authority
//!   on token validity.

use crate::core::auth::{self, SessionStatus, TokenError};
use crate::core::http::AuthHeaderSlot;
use crate::core::timer::{self, Clock, TimerScheduler};
use crate::core::token::TokenStore;
use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Lifecycle notifications emitted by [`SessionManager`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A token was accepted and its expiry timer armed.
    Established {
        /// When the token expires.
        expires_at: DateTime<Utc>,
    },
    /// The session was ended on request (sign-out).
    Terminated,
    /// The session ended because its token expired or failed validation.
    Expired,
}

/// Receiver for [`SessionEvent`]s.
pub type SessionListener = Rc<dyn Fn(SessionEvent)>;

/// Reasons [`SessionManager::establish`] refuses a token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The token's claims could not be read.
    #[error("cannot establish session: {0}")]
    Token(#[from] TokenError),
}

struct ArmedTimer<H> {
    generation: u64,
    expires_at: DateTime<Utc>,
    _handle: H,
}

struct SessionInner<S, T: TimerScheduler> {
    store: S,
    auth_header: AuthHeaderSlot,
    scheduler: T,
    clock: Rc<dyn Clock>,
    listener: SessionListener,
    token: RefCell<Option<String>>,
    armed: RefCell<Option<ArmedTimer<T::Handle>>>,
    generation: Cell<u64>,
}

/// Owns the session token, the auth header, and the expiry timer.
pub struct SessionManager<S, T>
where
    S: TokenStore + 'static,
    T: TimerScheduler + 'static,
{
    inner: Rc<SessionInner<S, T>>,
}

impl<S, T> Clone for SessionManager<S, T>
where
    S: TokenStore + 'static,
    T: TimerScheduler + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, T> SessionManager<S, T>
where
    S: TokenStore + 'static,
    T: TimerScheduler + 'static,
{
    /// Wire a manager to its collaborators. `auth_header` must be the same
    /// slot the API client reads from.
    pub fn new(
        store: S,
        auth_header: AuthHeaderSlot,
        scheduler: T,
        clock: Rc<dyn Clock>,
        listener: SessionListener,
    ) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                store,
                auth_header,
                scheduler,
                clock,
                listener,
                token: RefCell::new(None),
                armed: RefCell::new(None),
                generation: Cell::new(0),
            }),
        }
    }

    /// Whether `token` is well-formed and unexpired by this manager's clock.
    #[must_use]
    pub fn is_valid(&self, token: Option<&str>) -> bool {
        auth::is_valid_at(token, self.inner.clock.now())
    }

    /// Adopt `token` as the active session.
    ///
    /// Persists the token, points the shared auth header at it, and arms a
    /// single expiry timer, replacing any timer from an earlier call. An
    /// already-expired token is accepted and expires on the next timer tick.
    ///
    /// # Errors
    /// Returns [`SessionError::Token`] when the token's expiry cannot be
    /// decoded; the session is left terminated.
    pub fn establish(&self, token: &str) -> Result<SessionStatus, SessionError> {
        let expires_at = match auth::expires_at(token) {
            Ok(expires_at) => expires_at,
            Err(err) => {
                warn!(error = %err, "rejected malformed session token");
                self.clear();
                return Err(err.into());
            }
        };
        if let Err(err) = self.inner.store.set(token) {
            warn!(error = %err, "session token not persisted; continuing in memory");
        }
        self.inner.token.replace(Some(token.to_string()));
        self.inner.auth_header.set_bearer(token);
        self.arm(expires_at);
        info!(%expires_at, "session established");
        (self.inner.listener)(SessionEvent::Established { expires_at });
        Ok(self.status())
    }

    /// End the session on request: clear storage, drop the auth header, and
    /// cancel the expiry timer.
    pub fn terminate(&self) {
        self.clear();
        info!("session terminated");
        (self.inner.listener)(SessionEvent::Terminated);
    }

    /// Startup validation of whatever token storage already holds.
    ///
    /// A valid token is re-established; an expired or malformed one is
    /// cleared through the expiry path.
    pub fn restore(&self) -> SessionStatus {
        match self.inner.store.get() {
            None => {
                debug!("no stored session token");
                SessionStatus::Anonymous
            }
            Some(token) if self.is_valid(Some(&token)) => {
                self.establish(&token).unwrap_or(SessionStatus::Anonymous)
            }
            Some(_) => {
                debug!("stored session token failed validation");
                self.expire();
                SessionStatus::Anonymous
            }
        }
    }

    /// Re-validate the current token, running the expiry path if it is no
    /// longer valid.
    pub fn check(&self) -> SessionStatus {
        let token = self.token();
        if self.is_valid(token.as_deref()) {
            return self.status();
        }
        if token.is_some() || self.inner.armed.borrow().is_some() {
            self.expire();
        }
        SessionStatus::Anonymous
    }

    /// Current status by this manager's clock.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self.inner.armed.borrow().as_ref() {
            None => SessionStatus::Anonymous,
            Some(armed) if armed.expires_at > self.inner.clock.now() => SessionStatus::Active {
                expires_at: armed.expires_at,
            },
            Some(_) => SessionStatus::Expired,
        }
    }

    /// Token of the live session, or the stored one when none is held.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner
            .token
            .borrow()
            .clone()
            .or_else(|| self.inner.store.get())
    }

    /// Shared auth header slot this manager writes to.
    #[must_use]
    pub fn auth_header(&self) -> &AuthHeaderSlot {
        &self.inner.auth_header
    }

    /// Whether both handles drive the same session.
    #[must_use]
    pub fn same_session(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn arm(&self, expires_at: DateTime<Utc>) {
        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);
        let delay = timer::delay_until(self.inner.clock.now(), expires_at);
        let weak: Weak<SessionInner<S, T>> = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Self { inner }.on_timer(generation);
                }
            }),
        );
        debug!(delay = ?delay, generation, "expiry timer armed");
        let previous = self.inner.armed.replace(Some(ArmedTimer {
            generation,
            expires_at,
            _handle: handle,
        }));
        drop(previous);
    }

    fn on_timer(&self, generation: u64) {
        let armed = self
            .inner
            .armed
            .borrow()
            .as_ref()
            .map(|armed| (armed.generation, armed.expires_at));
        let Some((current, expires_at)) = armed else {
            return;
        };
        if current != generation {
            debug!(generation, current, "ignoring superseded expiry timer");
            return;
        }
        if expires_at > self.inner.clock.now() {
            debug!(%expires_at, "clamped expiry timer elapsed early; re-arming");
            self.arm(expires_at);
            return;
        }
        self.expire();
    }

    fn expire(&self) {
        self.clear();
        info!("session expired");
        (self.inner.listener)(SessionEvent::Expired);
    }

    fn clear(&self) {
        self.inner
            .generation
            .set(self.inner.generation.get().wrapping_add(1));
        let previous = self.inner.armed.take();
        drop(previous);
        self.inner.token.replace(None);
        self.inner.store.clear();
        self.inner.auth_header.clear();
    }
}

impl<S, T> fmt::Debug for SessionManager<S, T>
where
    S: TokenStore + 'static,
    T: TimerScheduler + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("status", &self.status())
            .field("auth_header", &self.inner.auth_header)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::unsigned_token;
    use crate::core::timer::{MAX_TIMER_DELAY, ManualClock, ManualScheduler};
    use crate::core::token::{MemoryTokenStore, StorageError};
    use chrono::TimeZone;
    use std::time::Duration;

    struct Harness {
        manager: SessionManager<MemoryTokenStore, ManualScheduler>,
        store: MemoryTokenStore,
        header: AuthHeaderSlot,
        scheduler: ManualScheduler,
        clock: ManualClock,
        events: Rc<RefCell<Vec<SessionEvent>>>,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_store(MemoryTokenStore::default())
        }

        fn with_store(store: MemoryTokenStore) -> Self {
            let header = AuthHeaderSlot::default();
            let scheduler = ManualScheduler::default();
            let start = Utc
                .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
                .single()
                .expect("valid date");
            let clock = ManualClock::new(start);
            let events = Rc::new(RefCell::new(Vec::new()));
            let sink = events.clone();
            let manager = SessionManager::new(
                store.clone(),
                header.clone(),
                scheduler.clone(),
                Rc::new(clock.clone()),
                Rc::new(move |event| sink.borrow_mut().push(event)),
            );
            Self {
                manager,
                store,
                header,
                scheduler,
                clock,
                events,
            }
        }

        fn token_in(&self, seconds: i64) -> String {
            unsigned_token(self.clock.now().timestamp() + seconds)
        }

        fn advance(&self, by: Duration) -> usize {
            self.clock.advance(by);
            self.scheduler.advance(by)
        }

        fn expired_count(&self) -> usize {
            self.events
                .borrow()
                .iter()
                .filter(|event| **event == SessionEvent::Expired)
                .count()
        }
    }

    #[test]
    fn establish_sets_store_header_and_one_timer() {
        let h = Harness::new();
        let token = h.token_in(60);
        let status = h.manager.establish(&token).expect("valid token");
        assert!(status.is_active());
        assert_eq!(h.store.get().as_deref(), Some(token.as_str()));
        assert_eq!(h.header.get(), Some(format!("Bearer {token}")));
        assert_eq!(h.scheduler.armed(), 1);
        assert_eq!(h.scheduler.next_delay(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn terminate_clears_everything() {
        let h = Harness::new();
        h.manager.establish(&h.token_in(60)).expect("valid token");
        h.manager.terminate();
        assert!(h.store.is_empty());
        assert!(!h.header.is_set());
        assert_eq!(h.scheduler.armed(), 0);
        assert_eq!(h.manager.status(), SessionStatus::Anonymous);
        assert_eq!(h.events.borrow().last(), Some(&SessionEvent::Terminated));
    }

    #[test]
    fn timer_expiry_clears_session_and_notifies() {
        let h = Harness::new();
        h.manager.establish(&h.token_in(30)).expect("valid token");
        assert_eq!(h.advance(Duration::from_secs(30)), 1);
        assert!(h.store.is_empty());
        assert!(!h.header.is_set());
        assert_eq!(h.expired_count(), 1);
        assert_eq!(h.manager.status(), SessionStatus::Anonymous);
    }

    #[test]
    fn expired_token_fires_immediately() {
        let h = Harness::new();
        let status = h.manager.establish(&h.token_in(-5)).expect("decodable token");
        assert_eq!(status, SessionStatus::Expired);
        assert_eq!(h.scheduler.next_delay(), Some(Duration::ZERO));
        assert_eq!(h.advance(Duration::ZERO), 1);
        assert_eq!(h.expired_count(), 1);
        assert!(h.store.is_empty());
    }

    #[test]
    fn reestablish_supersedes_previous_timer() {
        let h = Harness::new();
        h.manager.establish(&h.token_in(10)).expect("token a");
        let token_b = h.token_in(100);
        h.manager.establish(&token_b).expect("token b");
        assert_eq!(h.scheduler.armed(), 1);
        h.advance(Duration::from_secs(50));
        assert_eq!(h.expired_count(), 0);
        assert_eq!(h.store.get().as_deref(), Some(token_b.as_str()));
        h.advance(Duration::from_secs(50));
        assert_eq!(h.expired_count(), 1);
    }

    #[test]
    fn malformed_token_is_rejected_and_session_cleared() {
        let h = Harness::new();
        h.manager.establish(&h.token_in(60)).expect("valid token");
        let err = h.manager.establish("garbage").expect_err("malformed");
        assert_eq!(err, SessionError::Token(TokenError::Shape));
        assert!(h.store.is_empty());
        assert!(!h.header.is_set());
        assert_eq!(h.scheduler.armed(), 0);
    }

    #[test]
    fn far_future_expiry_is_clamped_and_rearmed() {
        let h = Harness::new();
        let days = 60 * 24 * 60 * 60;
        h.manager.establish(&h.token_in(days)).expect("valid token");
        assert_eq!(h.scheduler.next_delay(), Some(MAX_TIMER_DELAY));
        assert_eq!(h.advance(MAX_TIMER_DELAY), 1);
        assert_eq!(h.expired_count(), 0);
        assert!(h.manager.status().is_active());
        assert_eq!(h.scheduler.armed(), 1);
        h.advance(MAX_TIMER_DELAY);
        h.advance(MAX_TIMER_DELAY);
        assert_eq!(h.expired_count(), 1);
    }

    #[test]
    fn restore_keeps_valid_stored_token() {
        let h = Harness::new();
        let token = h.token_in(120);
        h.store.set(&token).expect("memory store");
        assert!(h.manager.restore().is_active());
        assert!(h.header.is_set());
        assert_eq!(h.scheduler.armed(), 1);
    }

    #[test]
    fn restore_clears_expired_stored_token() {
        let h = Harness::with_store(MemoryTokenStore::with_token(unsigned_token(1)));
        assert_eq!(h.manager.restore(), SessionStatus::Anonymous);
        assert!(h.store.is_empty());
        assert_eq!(h.expired_count(), 1);
    }

    #[test]
    fn restore_without_token_is_silent() {
        let h = Harness::new();
        assert_eq!(h.manager.restore(), SessionStatus::Anonymous);
        assert!(h.events.borrow().is_empty());
    }

    #[test]
    fn check_runs_expiry_path_for_stale_token() {
        let h = Harness::new();
        h.manager.establish(&h.token_in(10)).expect("valid token");
        h.clock.advance(Duration::from_secs(11));
        assert_eq!(h.manager.check(), SessionStatus::Anonymous);
        assert_eq!(h.expired_count(), 1);
        assert_eq!(h.scheduler.armed(), 0);
    }

    struct ReadOnlyStore;

    impl TokenStore for ReadOnlyStore {
        fn set(&self, _token: &str) -> Result<(), StorageError> {
            Err(StorageError {
                operation: "set",
                key: "accessToken",
                detail: "quota exceeded".to_string(),
            })
        }

        fn get(&self) -> Option<String> {
            None
        }

        fn clear(&self) {}
    }

    #[test]
    fn unpersisted_session_survives_checks() {
        let scheduler = ManualScheduler::default();
        let header = AuthHeaderSlot::default();
        let clock = ManualClock::new(Utc.timestamp_opt(1_000_000, 0).single().expect("timestamp"));
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let manager = SessionManager::new(
            ReadOnlyStore,
            header.clone(),
            scheduler.clone(),
            Rc::new(clock.clone()),
            Rc::new(move |event| sink.borrow_mut().push(event)),
        );
        let token = unsigned_token(clock.now().timestamp() + 3600);

        assert!(manager.establish(&token).expect("valid token").is_active());
        assert!(manager.check().is_active());
        assert_eq!(manager.token().as_deref(), Some(token.as_str()));
        assert!(header.is_set());
        assert_eq!(events.borrow().len(), 1);

        clock.advance(Duration::from_secs(3600));
        assert_eq!(scheduler.advance(Duration::from_secs(3600)), 1);
        assert_eq!(events.borrow().last(), Some(&SessionEvent::Expired));
        assert_eq!(manager.token(), None);
        assert!(!header.is_set());
    }

    #[test]
    fn check_leaves_valid_session_alone() {
        let h = Harness::new();
        h.manager.establish(&h.token_in(10)).expect("valid token");
        assert!(h.manager.check().is_active());
        assert_eq!(h.expired_count(), 0);
    }
}
