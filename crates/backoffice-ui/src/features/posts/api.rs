//! Post repository.

use crate::core::endpoints::{POSTS, PostQuery, post_path, posts_path};
use crate::services::api::{ApiClient, ApiError};
use backoffice_api_models::{Acknowledgement, EntityId, Post, PostInput};

/// List posts matching `query`.
pub(crate) async fn list_posts(client: &ApiClient, query: &PostQuery) -> Result<Vec<Post>, ApiError> {
    client.get(&posts_path(query)).await
}

/// Fetch one post.
pub(crate) async fn get_post(client: &ApiClient, id: EntityId) -> Result<Post, ApiError> {
    client.get(&post_path(id)).await
}

/// Create a post.
pub(crate) async fn create_post(client: &ApiClient, input: &PostInput) -> Result<Post, ApiError> {
    client.post(POSTS, input).await
}

/// Replace a post's writable fields.
pub(crate) async fn update_post(
    client: &ApiClient,
    id: EntityId,
    input: &PostInput,
) -> Result<Post, ApiError> {
    client.put(&post_path(id), input).await
}

/// Delete a post.
pub(crate) async fn delete_post(
    client: &ApiClient,
    id: EntityId,
) -> Result<Acknowledgement, ApiError> {
    client.delete(&post_path(id)).await
}
