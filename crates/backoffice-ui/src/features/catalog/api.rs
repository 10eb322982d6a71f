//! Generic collection loader.

use crate::core::entity::{EntityAction, EntityKind};
use crate::features::catalog::loader::replace_with;
use crate::services::api::{ApiClient, ApiError};
use yew::Callback;

/// Fetch the full collection for `K`.
pub(crate) async fn fetch_all<K: EntityKind>(client: &ApiClient) -> Result<Vec<K::Item>, ApiError> {
    client.get(K::RESOURCE).await
}

/// Fetch `K` and replace the collection with the result.
pub(crate) async fn load<K: EntityKind>(
    client: &ApiClient,
    dispatch: &Callback<EntityAction<K::Item>>,
) -> Result<usize, ApiError> {
    replace_with(fetch_all::<K>(client), dispatch).await
}
