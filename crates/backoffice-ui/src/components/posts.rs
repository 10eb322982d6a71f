use crate::app::api::ApiCtx;
use crate::app::entity::{EntityContext, EntityProvider, dispatcher, use_entities};
use crate::components::entity_table::EntityTable;
use crate::core::endpoints::PostQuery;
use crate::features::catalog::kinds::Posts;
use crate::features::catalog::loader::replace_with;
use crate::features::posts::api::{create_post, delete_post, get_post, list_posts, update_post};
use crate::features::posts::state::PostFormState;
use crate::services::api::{ApiClient, ApiError};
use backoffice_api_models::EntityId;
use gloo::console;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(PostsPage)]
pub(crate) fn posts_page() -> Html {
    html! {
        <section class="posts">
            <EntityProvider<Posts>>
                <PostsPanel />
            </EntityProvider<Posts>>
        </section>
    }
}

fn describe(err: &ApiError) -> String {
    err.backend_message().unwrap_or_else(|| err.to_string())
}

/// Replace the listing with the posts matching `search`.
fn refresh(
    client: Rc<ApiClient>,
    entities: &EntityContext<Posts>,
    search: String,
    error: UseStateHandle<Option<String>>,
) {
    let dispatch = dispatcher(entities);
    spawn_local(async move {
        let query = PostQuery {
            page: None,
            search: Some(search),
        };
        match replace_with(list_posts(&client, &query), &dispatch).await {
            Ok(_) => error.set(None),
            Err(err) => {
                console::error!("post listing failed", err.to_string());
                error.set(Some(describe(&err)));
            }
        }
    });
}

#[function_component(PostsPanel)]
fn posts_panel() -> Html {
    let api = use_context::<ApiCtx>();
    let entities = use_entities::<Posts>();
    let search = use_state(String::new);
    let form = use_state(PostFormState::default);
    let error = use_state(|| None as Option<String>);

    let reload = {
        let api = api.clone();
        let entities = entities.clone();
        let search = search.clone();
        let error = error.clone();
        Callback::from(move |()| {
            if let (Some(api), Some(entities)) = (&api, &entities) {
                refresh(api.client.clone(), entities, (*search).clone(), error.clone());
            }
        })
    };

    {
        let reload = reload.clone();
        use_effect_with_deps(
            move |_| {
                reload.emit(());
                || ()
            },
            (),
        );
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };
    let on_search_submit = {
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            reload.emit(());
        })
    };

    let on_edit = {
        let api = api.clone();
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |id: EntityId| {
            let Some(api) = api.clone() else { return };
            let form = form.clone();
            let error = error.clone();
            spawn_local(async move {
                match get_post(&api.client, id).await {
                    Ok(post) => form.set(PostFormState::from_post(&post)),
                    Err(err) => error.set(Some(describe(&err))),
                }
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        let reload = reload.clone();
        let error = error.clone();
        Callback::from(move |id: EntityId| {
            let Some(api) = api.clone() else { return };
            let reload = reload.clone();
            let error = error.clone();
            spawn_local(async move {
                match delete_post(&api.client, id).await {
                    Ok(ack) if ack.success => reload.emit(()),
                    Ok(ack) => error.set(Some(
                        ack.message
                            .or(ack.error)
                            .unwrap_or_else(|| "delete was refused".to_string()),
                    )),
                    Err(err) => error.set(Some(describe(&err))),
                }
            });
        })
    };

    let on_save = {
        let form = form.clone();
        let reload = reload.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(api) = api.clone() else { return };
            let input = match form.to_input() {
                Ok(input) => input,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let editing = form.editing;
            let form = form.clone();
            let reload = reload.clone();
            let error = error.clone();
            spawn_local(async move {
                let saved = match editing {
                    Some(id) => update_post(&api.client, id, &input).await,
                    None => create_post(&api.client, &input).await,
                };
                match saved {
                    Ok(_) => {
                        form.set(PostFormState::default());
                        reload.emit(());
                    }
                    Err(err) => error.set(Some(describe(&err))),
                }
            });
        })
    };

    let on_title = text_input(&form, |state, value| state.title = value);
    let on_slug = text_input(&form, |state, value| state.slug = value);
    let on_category = text_input(&form, |state, value| state.category_id = value);
    let on_content = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.content = area.value();
            form.set(next);
        })
    };
    let on_published = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.published = input.checked();
            form.set(next);
        })
    };
    let on_reset = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.set(PostFormState::default()))
    };

    html! {
        <>
            <form class="toolbar" onsubmit={on_search_submit}>
                <input
                    type="search"
                    placeholder="Search posts"
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <button type="submit" class="ghost">{"Search"}</button>
            </form>
            {match &*error {
                Some(message) => html! { <p class="error-text">{message.clone()}</p> },
                None => html! {},
            }}
            <EntityTable<Posts>
                action_label={AttrValue::from("Edit")}
                on_action={on_edit}
                danger_label={AttrValue::from("Delete")}
                on_danger={on_delete}
            />
            <form class="card editor" onsubmit={on_save}>
                <h2>{if form.editing.is_some() { "Edit post" } else { "New post" }}</h2>
                <label>{"Title"}<input value={form.title.clone()} oninput={on_title} /></label>
                <label>{"Slug"}<input value={form.slug.clone()} oninput={on_slug} /></label>
                <label>{"Category ID"}<input value={form.category_id.clone()} oninput={on_category} /></label>
                <label>{"Content"}<textarea value={form.content.clone()} oninput={on_content} /></label>
                <label class="inline">
                    <input type="checkbox" checked={form.published} onchange={on_published} />
                    {"Published"}
                </label>
                <div class="actions">
                    <button type="submit" class="solid">{"Save"}</button>
                    <button type="button" class="ghost" onclick={on_reset}>{"Clear"}</button>
                </div>
            </form>
        </>
    }
}

fn text_input(
    form: &UseStateHandle<PostFormState>,
    apply: fn(&mut PostFormState, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}
