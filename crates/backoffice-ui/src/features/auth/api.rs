//! Authentication repository.

use crate::core::endpoints::{CURRENT_USER_QUERY, SIGN_IN};
use crate::services::api::{ApiClient, ApiError};
use backoffice_api_models::{CurrentUserData, GraphQlResponse, SignInRequest, SignInResponse};
use serde_json::Value;

/// Exchange credentials for a token. The body is returned as sent,
/// including any backend `error`/`message`.
pub(crate) async fn sign_in(
    client: &ApiClient,
    credentials: &SignInRequest,
) -> Result<SignInResponse, ApiError> {
    client.post(SIGN_IN, credentials).await
}

/// Look up the signed-in user.
pub(crate) async fn current_user(
    client: &ApiClient,
) -> Result<GraphQlResponse<CurrentUserData>, ApiError> {
    client.graphql(CURRENT_USER_QUERY, Value::Null).await
}
