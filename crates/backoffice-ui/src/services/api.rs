//! HTTP client helpers (REST + GraphQL).
//!
//! # Design
//! - One client per app boot; auth flows through the shared header slot.
//! - Failures surface unchanged: no retries, no re-authentication.
//! - Non-2xx bodies are kept verbatim so callers can read backend errors.

use crate::core::config::ApiConfig;
use crate::core::endpoints::GRAPHQL;
use crate::core::http::{AuthHeaderSlot, default_headers};
use backoffice_api_models::{GraphQlRequest, GraphQlResponse};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by [`ApiClient`].
#[derive(Debug, Clone, Error, PartialEq)]
pub(crate) enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, when it was JSON.
        body: Option<Value>,
    },
    /// The request body could not be encoded.
    #[error("request encoding failed: {0}")]
    Encode(String),
    /// The response body did not match the expected shape.
    #[error("response decoding failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Backend-provided `message` (or `error`) field from a status failure.
    pub(crate) fn backend_message(&self) -> Option<String> {
        let Self::Status {
            body: Some(body), ..
        } = self
        else {
            return None;
        };
        body.get("message")
            .or_else(|| body.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Shared JSON client for the content backend.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    config: ApiConfig,
    auth_header: AuthHeaderSlot,
}

impl ApiClient {
    pub(crate) const fn new(config: ApiConfig, auth_header: AuthHeaderSlot) -> Self {
        Self {
            config,
            auth_header,
        }
    }

    pub(crate) const fn auth_header(&self) -> &AuthHeaderSlot {
        &self.auth_header
    }

    fn apply_headers(&self, mut request: Request) -> Request {
        for (name, value) in default_headers(&self.auth_header) {
            request = request.header(name, &value);
        }
        request
    }

    async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        decode(response).await
    }

    fn with_body<B: Serialize + ?Sized>(request: Request, body: &B) -> Result<Request, ApiError> {
        request
            .json(body)
            .map_err(|err| ApiError::Encode(err.to_string()))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.apply_headers(Request::get(&self.config.url(path)));
        self.send(request).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.apply_headers(Request::post(&self.config.url(path)));
        self.send(Self::with_body(request, body)?).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.apply_headers(Request::put(&self.config.url(path)));
        self.send(Self::with_body(request, body)?).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.apply_headers(Request::delete(&self.config.url(path)));
        self.send(request).await
    }

    /// Run a GraphQL document. Resolver errors come back inside the
    /// response, not as an [`ApiError`].
    pub(crate) async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<GraphQlResponse<T>, ApiError> {
        let body = GraphQlRequest {
            query: query.to_string(),
            variables,
        };
        self.post(GRAPHQL, &body).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.json::<Value>().await.ok();
        return Err(ApiError::Status { status, body });
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
