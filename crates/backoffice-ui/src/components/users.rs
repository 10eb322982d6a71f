use crate::app::api::ApiCtx;
use crate::features::users::api::create_user;
use crate::features::users::state::{MIN_PASSWORD_LEN, NewUserForm};
use gloo::console;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(UsersPage)]
pub(crate) fn users_page() -> Html {
    let api = use_context::<ApiCtx>();
    let form = use_state(NewUserForm::default);
    let error = use_state(|| None as Option<String>);
    let created = use_state(|| None as Option<String>);

    let field = |apply: fn(&mut NewUserForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_email = field(|state, value| state.email = value);
    let on_name = field(|state, value| state.name = value);
    let on_password = field(|state, value| state.password = value);

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let created = created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(api) = api.clone() else { return };
            let payload = match form.to_payload() {
                Ok(payload) => payload,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let form = form.clone();
            let error = error.clone();
            let created = created.clone();
            spawn_local(async move {
                match create_user(&api.client, &payload).await {
                    Ok(user) => {
                        error.set(None);
                        created.set(Some(user.email));
                        form.set(NewUserForm::default());
                    }
                    Err(err) => {
                        console::error!("user creation failed", err.to_string());
                        error.set(Some(err.backend_message().unwrap_or_else(|| err.to_string())));
                    }
                }
            });
        })
    };

    html! {
        <section class="users">
            <form class="card" onsubmit={on_submit}>
                <h1>{"Invite a user"}</h1>
                {match &*created {
                    Some(email) => html! { <p class="notice">{format!("Created {email}.")}</p> },
                    None => html! {},
                }}
                <label>{"Email"}<input type="email" value={form.email.clone()} oninput={on_email} /></label>
                <label>{"Name"}<input value={form.name.clone()} oninput={on_name} /></label>
                <label>
                    {format!("Password (min {MIN_PASSWORD_LEN} characters)")}
                    <input type="password" autocomplete="new-password" value={form.password.clone()} oninput={on_password} />
                </label>
                {match &*error {
                    Some(message) => html! { <p class="error-text">{message.clone()}</p> },
                    None => html! {},
                }}
                <button type="submit" class="solid">{"Create user"}</button>
            </form>
        </section>
    }
}
