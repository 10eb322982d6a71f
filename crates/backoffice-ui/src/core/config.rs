//! Build-time configuration for the backend connection.
//!
//! # Design
//! - The base URL is baked in at build time (`BACKOFFICE_API_URL`) because the
//!   bundle is served as static assets with no runtime config endpoint.
//! - Hosts without the variable fall back to a caller-supplied origin.

/// Storage key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Fallback base URL for native builds and local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Base URL captured from the build environment, if any.
pub const API_BASE_URL_ENV: Option<&str> = option_env!("BACKOFFICE_API_URL");

/// Log filter used when the build sets none.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log filter directive captured from the build environment, if any.
pub const LOG_FILTER_ENV: Option<&str> = option_env!("BACKOFFICE_LOG");

/// Effective log filter directive: `configured` when non-blank, otherwise
/// [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn log_filter(configured: Option<&str>) -> &str {
    configured
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
}

/// Connection settings for the shared API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute base URL without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Prefer the build-time URL, otherwise use `fallback`.
    #[must_use]
    pub fn from_env_or(fallback: impl Into<String>) -> Self {
        Self::resolve(API_BASE_URL_ENV, fallback)
    }

    fn resolve(configured: Option<&str>, fallback: impl Into<String>) -> Self {
        match configured.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Self::new(value),
            None => Self::new(fallback),
        }
    }

    /// Join an endpoint path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env_or(DEFAULT_API_BASE_URL)
    }
}
