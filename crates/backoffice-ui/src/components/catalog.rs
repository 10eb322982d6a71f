use crate::app::api::ApiCtx;
use crate::app::entity::{EntityProvider, dispatcher, use_entities};
use crate::components::entity_table::EntityTable;
use crate::core::entity::EntityKind;
use crate::features::catalog::api::load;
use crate::features::catalog::kinds::{
    Advantages, BonusServices, CatalogSection, Categories, Prices, QuestionsAnswers,
    ServicePacks, SolutionCategories,
};
use gloo::console;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub(crate) fn render_catalog(section: CatalogSection) -> Html {
    match section {
        CatalogSection::Advantages => html! { <CatalogPage<Advantages> /> },
        CatalogSection::BonusServices => html! { <CatalogPage<BonusServices> /> },
        CatalogSection::Categories => html! { <CatalogPage<Categories> /> },
        CatalogSection::Prices => html! { <CatalogPage<Prices> /> },
        CatalogSection::QuestionsAnswers => html! { <CatalogPage<QuestionsAnswers> /> },
        CatalogSection::ServicePacks => html! { <CatalogPage<ServicePacks> /> },
        CatalogSection::SolutionCategories => html! { <CatalogPage<SolutionCategories> /> },
    }
}

#[function_component(CatalogPage)]
pub(crate) fn catalog_page<K: EntityKind>() -> Html {
    html! {
        <section class="catalog">
            <EntityProvider<K>>
                <CatalogLoader<K> />
                <EntityTable<K> />
            </EntityProvider<K>>
        </section>
    }
}

/// Loads the collection on mount and offers a manual reload.
#[function_component(CatalogLoader)]
pub(crate) fn catalog_loader<K: EntityKind>() -> Html {
    let api = use_context::<ApiCtx>();
    let entities = use_entities::<K>();
    let error = use_state(|| None as Option<String>);

    let reload = {
        let error = error.clone();
        Callback::from(move |()| {
            let (Some(api), Some(entities)) = (api.clone(), entities.clone()) else {
                return;
            };
            let error = error.clone();
            let dispatch = dispatcher(&entities);
            spawn_local(async move {
                match load::<K>(&api.client, &dispatch).await {
                    Ok(_) => error.set(None),
                    Err(err) => {
                        console::error!("collection load failed", K::NAME, err.to_string());
                        error.set(Some(err.backend_message().unwrap_or_else(|| err.to_string())));
                    }
                }
            });
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

    html! {
        <div class="toolbar">
            {match &*error {
                Some(message) => html! { <p class="error-text">{message.clone()}</p> },
                None => html! {},
            }}
            <button class="ghost" onclick={reload.reform(|_: MouseEvent| ())}>{"Reload"}</button>
        </div>
    }
}
