//! User repository.

use crate::core::endpoints::USERS;
use crate::services::api::{ApiClient, ApiError};
use backoffice_api_models::{NewUser, User};

/// Create a dashboard user.
pub(crate) async fn create_user(client: &ApiClient, payload: &NewUser) -> Result<User, ApiError> {
    client.post(USERS, payload).await
}
