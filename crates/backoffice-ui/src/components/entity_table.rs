use crate::app::entity::use_entities;
use crate::core::entity::EntityKind;
use backoffice_api_models::{Entity, EntityId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EntityTableProps {
    /// Row action label; rows are read-only when absent.
    #[prop_or_default]
    pub action_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_action: Callback<EntityId>,
    /// Second row action, used for destructive operations.
    #[prop_or_default]
    pub danger_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_danger: Callback<EntityId>,
}

/// Read-only listing of the nearest `K` collection.
#[function_component(EntityTable)]
pub(crate) fn entity_table<K: EntityKind>(props: &EntityTableProps) -> Html {
    let Some(entities) = use_entities::<K>() else {
        return html! { <p class="error-text">{"Collection provider missing."}</p> };
    };
    if entities.is_empty() {
        return html! { <p class="muted">{"Nothing here yet."}</p> };
    }

    html! {
        <table class="entity-table">
            <thead>
                <tr>
                    <th>{"ID"}</th>
                    <th>{K::NAME}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {for entities.items.iter().map(|item| render_row::<K>(item, props))}
            </tbody>
        </table>
    }
}

fn render_row<K: EntityKind>(item: &K::Item, props: &EntityTableProps) -> Html {
    let id = item.id();
    let action = props.action_label.clone().map(|label| {
        let on_action = props.on_action.clone();
        html! { <button class="ghost" onclick={Callback::from(move |_| on_action.emit(id))}>{label}</button> }
    });
    let danger = props.danger_label.clone().map(|label| {
        let on_danger = props.on_danger.clone();
        html! { <button class="danger" onclick={Callback::from(move |_| on_danger.emit(id))}>{label}</button> }
    });
    html! {
        <tr key={id.to_string()}>
            <td>{id.to_string()}</td>
            <td>{K::label(item)}</td>
            <td class="actions">{action}{danger}</td>
        </tr>
    }
}
