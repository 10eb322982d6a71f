#![forbid(unsafe_code)]
#![deny(missing_docs, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(clippy::all, clippy::pedantic, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Backoffice content API.
//!
//! These types mirror the JSON bodies the backend sends and accepts. Response
//! types keep any backend-reported `error`/`message` fields so callers see the
//! body exactly as it arrived; nothing here interprets them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend-assigned identifier shared by every content entity.
pub type EntityId = u64;

/// Entities that carry a backend-assigned unique identifier.
pub trait Entity {
    /// Identifier unique within the entity's collection.
    fn id(&self) -> EntityId;
}

macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Entity for $ty {
                fn id(&self) -> EntityId {
                    self.id
                }
            }
        )+
    };
}

/// Selling point shown on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Advantage {
    /// Backend identifier.
    pub id: EntityId,
    /// Short headline.
    pub title: String,
    /// Supporting copy.
    #[serde(default)]
    pub description: String,
    /// Optional icon reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Add-on service offered alongside a pack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BonusService {
    /// Backend identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Supporting copy.
    #[serde(default)]
    pub description: String,
    /// Optional price override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Content category used to group posts and pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: String,
    /// Parent category for nested trees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<EntityId>,
}

/// Pricing table row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Backend identifier.
    pub id: EntityId,
    /// Plan title.
    pub title: String,
    /// Amount in the listed currency.
    pub amount: f64,
    /// ISO currency code.
    #[serde(default)]
    pub currency: String,
    /// Billing period label (e.g. `month`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

/// Frequently asked question entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswer {
    /// Backend identifier.
    pub id: EntityId,
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

/// Bundle of services sold together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServicePack {
    /// Backend identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Supporting copy.
    #[serde(default)]
    pub description: String,
    /// Services included in the pack.
    #[serde(default)]
    pub services: Vec<String>,
    /// Pack price when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Grouping for solution pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SolutionCategory {
    /// Backend identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Supporting copy.
    #[serde(default)]
    pub description: String,
}

/// Blog post or page as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Backend identifier.
    pub id: EntityId,
    /// Post title.
    pub title: String,
    /// URL slug.
    #[serde(default)]
    pub slug: String,
    /// Rendered or markdown body.
    #[serde(default)]
    pub content: String,
    /// Whether the post is publicly visible.
    #[serde(default)]
    pub published: bool,
    /// Owning category, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<EntityId>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Writable post fields for create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    /// Post title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Body content.
    pub content: String,
    /// Publish flag.
    pub published: bool,
    /// Owning category, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<EntityId>,
}

/// Dashboard user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    pub id: EntityId,
    /// Login email.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Role label assigned by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Payload for creating a new dashboard user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Initial password.
    pub password: String,
}

/// Sign-in credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInRequest {
    /// Login email.
    pub email: String,
    /// Plain-text password, sent over HTTPS only.
    pub password: String,
}

/// Sign-in response body, including any backend-reported failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    /// Bearer token issued on success.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Authenticated user on success.
    #[serde(default)]
    pub user: Option<User>,
    /// Backend error code, if the sign-in was refused.
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable backend message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Acknowledgement {
    /// Whether the backend applied the change.
    #[serde(default)]
    pub success: bool,
    /// Backend error code, if any.
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable backend message.
    #[serde(default)]
    pub message: Option<String>,
}

/// GraphQL request envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQlRequest {
    /// Query or mutation document.
    pub query: String,
    /// Variables bound to the document.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub variables: Value,
}

/// GraphQL response envelope; `errors` is passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQlResponse<T> {
    /// Resolved data, absent when the whole operation failed.
    pub data: Option<T>,
    /// Errors reported by the backend resolver.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQlError>,
}

/// Single GraphQL error entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQlError {
    /// Error message.
    pub message: String,
    /// Response path the error applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    /// Backend-specific extensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// `me` query payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUserData {
    /// The authenticated user.
    pub me: User,
}

impl_entity!(
    Advantage,
    BonusService,
    Category,
    Price,
    QuestionAnswer,
    ServicePack,
    SolutionCategory,
    Post,
    User,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sign_in_response_keeps_backend_error_fields() {
        let body = json!({ "error": "INVALID_CREDENTIALS", "message": "Wrong password" });
        let parsed: SignInResponse = serde_json::from_value(body).expect("decode");
        assert_eq!(parsed.access_token, None);
        assert_eq!(parsed.error.as_deref(), Some("INVALID_CREDENTIALS"));
        assert_eq!(parsed.message.as_deref(), Some("Wrong password"));
    }

    #[test]
    fn sign_in_response_reads_camel_case_token() {
        let body = json!({
            "accessToken": "a.b.c",
            "user": { "id": 7, "email": "admin@example.com", "name": "Admin" }
        });
        let parsed: SignInResponse = serde_json::from_value(body).expect("decode");
        assert_eq!(parsed.access_token.as_deref(), Some("a.b.c"));
        assert_eq!(parsed.user.map(|user| user.id), Some(7));
    }

    #[test]
    fn graphql_errors_pass_through_with_partial_data() {
        let body = json!({
            "data": null,
            "errors": [{ "message": "not authorised", "path": ["me"] }]
        });
        let parsed: GraphQlResponse<CurrentUserData> =
            serde_json::from_value(body).expect("decode");
        assert!(parsed.data.is_none());
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].message, "not authorised");
    }

    #[test]
    fn post_input_omits_missing_category() {
        let input = PostInput {
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            ..PostInput::default()
        };
        let value = serde_json::to_value(&input).expect("encode");
        assert!(value.get("categoryId").is_none());
        assert_eq!(value["title"], "Hello");
    }

    #[test]
    fn entities_expose_their_backend_id() {
        let qa = QuestionAnswer {
            id: 42,
            question: "Why?".to_string(),
            answer: "Because.".to_string(),
        };
        assert_eq!(qa.id(), 42);
    }
}
