//! Fetch-then-replace sequencing shared by every collection load.

use crate::core::entity::EntityAction;
use std::future::Future;
use yew::Callback;

/// Await `fetch` and replace the collection with its items, returning how
/// many arrived. A failed fetch dispatches nothing.
///
/// Overlapping loads are not sequenced: each one dispatches when its own
/// fetch resolves, so the last response to arrive wins.
///
/// # Errors
/// Returns the fetch error unchanged.
pub async fn replace_with<T, E, F>(
    fetch: F,
    dispatch: &Callback<EntityAction<T>>,
) -> Result<usize, E>
where
    F: Future<Output = Result<Vec<T>, E>>,
{
    let items = fetch.await?;
    let count = items.len();
    dispatch.emit(EntityAction::Replace(items));
    Ok(count)
}
