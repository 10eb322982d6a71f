//! Scoped provider for entity collections.
//!
//! # Design
//! - Each mount owns one reducer instance; unmounting discards it.
//! - Subtrees never share a collection: two providers of the same kind hold
//!   independent state.

use crate::core::entity::{EntityAction, EntityKind, EntityState};
use yew::prelude::*;

/// `{state, dispatch}` handle exposed to a provider's subtree.
pub(crate) type EntityContext<K> = UseReducerHandle<EntityState<K>>;

#[derive(Properties, PartialEq)]
pub(crate) struct EntityProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EntityProvider)]
pub(crate) fn entity_provider<K: EntityKind>(props: &EntityProviderProps) -> Html {
    let state = use_reducer(EntityState::<K>::default);
    html! {
        <ContextProvider<EntityContext<K>> context={state}>
            { for props.children.iter() }
        </ContextProvider<EntityContext<K>>>
    }
}

/// Nearest collection of kind `K`, if a provider is mounted above.
#[hook]
pub(crate) fn use_entities<K: EntityKind>() -> Option<EntityContext<K>> {
    use_context::<EntityContext<K>>()
}

/// Dispatch handle as a plain callback, for code that should not know about
/// reducer handles.
pub(crate) fn dispatcher<K: EntityKind>(ctx: &EntityContext<K>) -> Callback<EntityAction<K::Item>> {
    let dispatcher = ctx.dispatcher();
    Callback::from(move |action| dispatcher.dispatch(action))
}
