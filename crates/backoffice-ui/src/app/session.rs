//! Browser session wiring.
//!
//! # Design
//! - One session manager per app boot, sharing the API client's header slot.
//! - Session events are mirrored into the yewdux store; an expiry also
//!   navigates to the sign-in route.

use crate::app::Route;
use crate::core::session::{SessionEvent, SessionListener, SessionManager};
use crate::core::store::{AppStore, apply_session_event};
use crate::core::timer::SystemClock;
use crate::features::auth::api::current_user;
use crate::services::api::ApiClient;
use crate::services::storage::LocalStorageTokenStore;
use crate::services::timer::GlooScheduler;
use gloo::console;
use std::rc::Rc;
use yew_router::prelude::Navigator;
use yewdux::prelude::Dispatch;

/// Session manager backed by LocalStorage and `setTimeout`.
pub(crate) type BrowserSession = SessionManager<LocalStorageTokenStore, GlooScheduler>;

/// Shared session context.
#[derive(Clone)]
pub(crate) struct SessionCtx {
    /// Singleton session manager.
    pub manager: BrowserSession,
}

impl SessionCtx {
    pub(crate) fn new(client: &ApiClient, listener: SessionListener) -> Self {
        Self {
            manager: SessionManager::new(
                LocalStorageTokenStore,
                client.auth_header().clone(),
                GlooScheduler,
                Rc::new(SystemClock),
                listener,
            ),
        }
    }
}

impl PartialEq for SessionCtx {
    fn eq(&self, other: &Self) -> bool {
        self.manager.same_session(&other.manager)
    }
}

/// Listener that mirrors events into the store and redirects on expiry.
pub(crate) fn session_listener(
    dispatch: Dispatch<AppStore>,
    navigator: Option<Navigator>,
) -> SessionListener {
    Rc::new(move |event| {
        dispatch.reduce_mut(|store| apply_session_event(store, event));
        if event == SessionEvent::Expired {
            console::warn!("session expired; returning to sign-in");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        }
    })
}

/// Look up the signed-in user and store it.
pub(crate) fn refresh_current_user(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>) {
    yew::platform::spawn_local(async move {
        match current_user(&client).await {
            Ok(response) => {
                for error in &response.errors {
                    console::warn!("current user lookup reported", error.message.as_str());
                }
                if let Some(data) = response.data {
                    dispatch.reduce_mut(|store| store.auth.user = Some(data.me));
                }
            }
            Err(err) => console::error!("current user lookup failed", err.to_string()),
        }
    });
}
