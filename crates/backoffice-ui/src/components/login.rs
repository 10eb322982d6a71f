use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::session::{SessionCtx, refresh_current_user};
use crate::core::store::AppStore;
use crate::features::auth::api::sign_in;
use crate::features::auth::logic::{SignInForm, SignInOutcome, interpret_sign_in};
use gloo::console;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api = use_context::<ApiCtx>();
    let session = use_context::<SessionCtx>();
    let navigator = use_navigator();
    let notice = use_selector(|store: &AppStore| store.auth.notice);
    let form = use_state(SignInForm::default);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(SignInForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(SignInForm {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (Some(api), Some(session)) = (api.clone(), session.clone()) else {
                return;
            };
            let request = match form.to_request() {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let error = error.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            busy.set(true);
            spawn_local(async move {
                let outcome = match sign_in(&api.client, &request).await {
                    Ok(response) => interpret_sign_in(&response),
                    Err(err) => SignInOutcome::Rejected(
                        err.backend_message().unwrap_or_else(|| err.to_string()),
                    ),
                };
                busy.set(false);
                match outcome {
                    SignInOutcome::Token(token) => match session.manager.establish(&token) {
                        Ok(_) => {
                            error.set(None);
                            refresh_current_user(api.client.clone(), Dispatch::<AppStore>::new());
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Dashboard);
                            }
                        }
                        Err(err) => {
                            console::error!("issued token rejected", err.to_string());
                            error.set(Some("The server issued an unusable token.".to_string()));
                        }
                    },
                    SignInOutcome::Rejected(message) => error.set(Some(message)),
                }
            });
        })
    };

    html! {
        <main class="login">
            <form class="card" onsubmit={on_submit}>
                <h1>{"Backoffice sign-in"}</h1>
                {match *notice {
                    Some(notice) => html! { <p class="notice">{notice.message()}</p> },
                    None => html! {},
                }}
                <label>
                    {"Email"}
                    <input
                        type="email"
                        autocomplete="username"
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                </label>
                <label>
                    {"Password"}
                    <input
                        type="password"
                        autocomplete="current-password"
                        value={form.password.clone()}
                        oninput={on_password}
                    />
                </label>
                {match &*error {
                    Some(message) => html! { <p class="error-text">{message.clone()}</p> },
                    None => html! {},
                }}
                <button type="submit" class="solid" disabled={*busy}>{"Sign in"}</button>
            </form>
        </main>
    }
}
