//! Generic replace-only entity collections.
//!
//! # Design
//! - One state/action/reducer triple serves every entity kind; a kind is a
//!   name/type pair implementing [`EntityKind`].
//! - Collections are a full-replace cache: each load swaps the whole list.
//! - Unknown actions are identity transitions and return the same `Rc`.
//! - Overlapping loads are not sequenced; whichever dispatch lands last wins.

use backoffice_api_models::{Entity, EntityId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};
use yew::functional::Reducible;

/// Name/type pair describing one backend collection.
pub trait EntityKind: 'static {
    /// Stable kind name used in logs and routes.
    const NAME: &'static str;
    /// REST collection path.
    const RESOURCE: &'static str;
    /// Element type held by the collection.
    type Item: Entity + Clone + PartialEq + fmt::Debug + DeserializeOwned + 'static;

    /// Primary display label for one item.
    fn label(item: &Self::Item) -> String;
}

/// Ordered collection for one entity kind.
pub struct EntityState<K: EntityKind> {
    /// Items in backend order.
    pub items: Vec<K::Item>,
}

impl<K: EntityKind> EntityState<K> {
    /// State holding `items`.
    #[must_use]
    pub const fn new(items: Vec<K::Item>) -> Self {
        Self { items }
    }

    /// Look up an item by id.
    #[must_use]
    pub fn find(&self, id: EntityId) -> Option<&K::Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: EntityKind> Default for EntityState<K> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<K: EntityKind> Clone for EntityState<K> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<K: EntityKind> PartialEq for EntityState<K> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<K: EntityKind> fmt::Debug for EntityState<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityState")
            .field("kind", &K::NAME)
            .field("items", &self.items)
            .finish()
    }
}

/// Mutations accepted by an entity collection.
///
/// Wire form is `{"type": "REPLACE", "payload": [...]}`; any other `type`
/// decodes to [`EntityAction::Unrecognized`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum EntityAction<T> {
    /// Replace every item with the payload.
    #[serde(rename = "REPLACE")]
    Replace(Vec<T>),
    /// Any action this collection does not handle.
    #[serde(other)]
    Unrecognized,
}

impl<K: EntityKind> Reducible for EntityState<K> {
    type Action = EntityAction<K::Item>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            EntityAction::Replace(items) => {
                if !has_unique_ids(&items) {
                    warn!(kind = K::NAME, "replacement payload contains duplicate ids");
                }
                debug!(kind = K::NAME, count = items.len(), "entity collection replaced");
                Rc::new(Self { items })
            }
            EntityAction::Unrecognized => self,
        }
    }
}

/// Whether every item in `items` has a distinct id.
#[must_use]
pub fn has_unique_ids<T: Entity>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_api_models::QuestionAnswer;
    use serde_json::json;

    struct Faq;

    impl EntityKind for Faq {
        const NAME: &'static str = "faq";
        const RESOURCE: &'static str = "/faq";
        type Item = QuestionAnswer;

        fn label(item: &Self::Item) -> String {
            item.question.clone()
        }
    }

    fn qa(id: u64) -> QuestionAnswer {
        QuestionAnswer {
            id,
            question: format!("q{id}"),
            answer: format!("a{id}"),
        }
    }

    #[test]
    fn replace_discards_previous_items() {
        let state = Rc::new(EntityState::<Faq>::new(vec![qa(2), qa(3)]));
        let next = state.reduce(EntityAction::Replace(vec![qa(1)]));
        assert_eq!(next.items, vec![qa(1)]);
    }

    #[test]
    fn replace_with_empty_payload_empties_collection() {
        let state = Rc::new(EntityState::<Faq>::new(vec![qa(1)]));
        let next = state.reduce(EntityAction::Replace(Vec::new()));
        assert!(next.is_empty());
    }

    #[test]
    fn unrecognized_action_returns_same_state() {
        let state = Rc::new(EntityState::<Faq>::new(vec![qa(4)]));
        let next = Rc::clone(&state).reduce(EntityAction::Unrecognized);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn wire_actions_decode() {
        let replace: EntityAction<QuestionAnswer> = serde_json::from_value(json!({
            "type": "REPLACE",
            "payload": [{ "id": 9, "question": "q", "answer": "a" }]
        }))
        .expect("decode replace");
        assert_eq!(replace, EntityAction::Replace(vec![QuestionAnswer {
            id: 9,
            question: "q".to_string(),
            answer: "a".to_string(),
        }]));
        let other: EntityAction<QuestionAnswer> =
            serde_json::from_value(json!({ "type": "APPEND" })).expect("decode other");
        assert_eq!(other, EntityAction::Unrecognized);
    }

    #[test]
    fn lookups_by_id() {
        let state = EntityState::<Faq>::new(vec![qa(1), qa(5)]);
        assert_eq!(state.find(5).map(|item| item.answer.as_str()), Some("a5"));
        assert!(state.find(7).is_none());
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn duplicate_ids_are_detected() {
        assert!(has_unique_ids(&[qa(1), qa(2)]));
        assert!(!has_unique_ids(&[qa(1), qa(1)]));
    }
}
