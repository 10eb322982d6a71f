use crate::app::Route;
use crate::app::session::SessionCtx;
use crate::core::store::AppStore;
use crate::features::catalog::kinds::CatalogSection;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct RequireSessionProps {
    #[prop_or_default]
    pub children: Children,
}

/// Render children inside the shell when signed in, otherwise send the user
/// to the sign-in route.
#[function_component(RequireSession)]
pub(crate) fn require_session(props: &RequireSessionProps) -> Html {
    let status = use_selector(|store: &AppStore| store.auth.status);
    if status.is_active() {
        html! { <AppShell>{ for props.children.iter() }</AppShell> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let session = use_context::<SessionCtx>();
    let user = use_selector(|store: &AppStore| store.auth.user.clone());
    let on_sign_out = Callback::from(move |_: MouseEvent| {
        if let Some(session) = &session {
            session.manager.terminate();
        }
    });
    let who = (*user)
        .as_ref()
        .map_or_else(String::new, |user| user.email.clone());

    html! {
        <div class="app-shell">
            <nav class="sidebar">
                <Link<Route> to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
                <Link<Route> to={Route::Posts}>{"Posts"}</Link<Route>>
                {for CatalogSection::all().into_iter().map(|section| html! {
                    <Link<Route> to={Route::Catalog { section: section.slug().to_string() }}>
                        {section.label()}
                    </Link<Route>>
                })}
                <Link<Route> to={Route::Users}>{"Users"}</Link<Route>>
                <div class="session">
                    <span class="muted">{who}</span>
                    <button class="ghost" onclick={on_sign_out}>{"Sign out"}</button>
                </div>
            </nav>
            <main class="content">
                { for props.children.iter() }
            </main>
        </div>
    }
}
