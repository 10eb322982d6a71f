use crate::app::api::ApiCtx;
use crate::app::session::{SessionCtx, refresh_current_user, session_listener};
use crate::components::catalog::render_catalog;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::posts::PostsPage;
use crate::components::shell::RequireSession;
use crate::components::users::UsersPage;
use crate::core::config::{ApiConfig, DEFAULT_API_BASE_URL};
use crate::core::store::AppStore;
use crate::features::catalog::kinds::CatalogSection;
use gloo::utils::window;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

pub(crate) mod api;
pub(crate) mod entity;
mod routes;
pub(crate) mod session;
mod telemetry;

pub(crate) use routes::Route;

#[function_component(BackofficeApp)]
pub(crate) fn backoffice_app() -> Html {
    html! {
        <BrowserRouter>
            <SessionRoot />
        </BrowserRouter>
    }
}

#[function_component(SessionRoot)]
fn session_root() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let ready = use_state(|| false);
    let api_ctx = use_memo(|_| ApiCtx::new(ApiConfig::from_env_or(page_origin())), ());
    let session_ctx = {
        let api_ctx = api_ctx.clone();
        use_memo(
            move |_| {
                SessionCtx::new(
                    &api_ctx.client,
                    session_listener(Dispatch::<AppStore>::new(), navigator),
                )
            },
            (),
        )
    };

    {
        let session_ctx = session_ctx.clone();
        let api_ctx = api_ctx.clone();
        let ready = ready.clone();
        use_effect_with_deps(
            move |_| {
                if session_ctx.manager.restore().is_active() {
                    refresh_current_user(api_ctx.client.clone(), Dispatch::<AppStore>::new());
                }
                ready.set(true);
                || ()
            },
            (),
        );
    }

    {
        let session_ctx = session_ctx.clone();
        use_effect_with_deps(
            move |_| {
                session_ctx.manager.check();
                || ()
            },
            route,
        );
    }

    if !*ready {
        return html! { <div class="loading" aria-busy="true">{"Loading…"}</div> };
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<SessionCtx> context={(*session_ctx).clone()}>
                <Switch<Route> render={switch} />
            </ContextProvider<SessionCtx>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! { <RequireSession><DashboardPage /></RequireSession> },
        Route::Posts => html! { <RequireSession><PostsPage /></RequireSession> },
        Route::Users => html! { <RequireSession><UsersPage /></RequireSession> },
        Route::Catalog { section } => match CatalogSection::from_slug(&section) {
            Some(section) => html! { <RequireSession>{ render_catalog(section) }</RequireSession> },
            None => html! { <Redirect<Route> to={Route::NotFound} /> },
        },
        Route::NotFound => html! { <p class="muted">{"Page not found."}</p> },
    }
}

fn page_origin() -> String {
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

/// Mount the dashboard into the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    telemetry::install();
    yew::Renderer::<BackofficeApp>::new().render();
}
