use crate::core::auth::SessionStatus;
use crate::core::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let auth = use_selector(|store: &AppStore| store.auth.clone());
    let greeting = auth
        .user
        .as_ref()
        .map_or_else(|| "Welcome".to_string(), |user| format!("Welcome, {}", user.name));
    let expiry = match auth.status {
        SessionStatus::Active { expires_at } => {
            format!("Session valid until {}", expires_at.format("%Y-%m-%d %H:%M UTC"))
        }
        SessionStatus::Anonymous | SessionStatus::Expired => String::new(),
    };

    html! {
        <section class="dashboard">
            <h1>{greeting}</h1>
            <p class="muted">{expiry}</p>
        </section>
    }
}
