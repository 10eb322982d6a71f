//! Token inspection and session status primitives.
//!
//! # Design
//! - Decode the `exp` claim only; signatures are the backend's concern.
//! - Any decode failure means "not valid", never a panic.
//! - Keep time injectable so validity checks are testable outside the browser.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Reasons a token's claims could not be read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// No token, or only whitespace.
    #[error("token is empty")]
    Empty,
    /// Not a `header.payload.signature` triple.
    #[error("token must have three dot-separated segments")]
    Shape,
    /// Payload segment is not base64url.
    #[error("token payload is not valid base64url")]
    Encoding,
    /// Payload is not JSON or lacks a numeric `exp`.
    #[error("token claims are invalid: {0}")]
    Claims(String),
    /// `exp` does not map to a representable timestamp.
    #[error("token expiry {0} is out of range")]
    ExpiryRange(i64),
}

/// Claims this client reads from a bearer token.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Expiry, in seconds since the Unix epoch.
    pub exp: i64,
}

/// Client-side view of the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No token held.
    #[default]
    Anonymous,
    /// A token is held and has not yet expired.
    Active {
        /// When the token stops being valid.
        expires_at: DateTime<Utc>,
    },
    /// A token is held but its expiry has passed; collapses to anonymous as
    /// soon as the expiry handler runs.
    Expired,
}

impl SessionStatus {
    /// Whether requests currently carry credentials.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Decode the claims segment of `token` without verifying its signature.
///
/// # Errors
/// Returns a [`TokenError`] describing why the claims could not be read.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(TokenError::Empty);
    }
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Shape);
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenError::Encoding)?;
    serde_json::from_slice(&bytes).map_err(|err| TokenError::Claims(err.to_string()))
}

/// Expiry instant embedded in `token`.
///
/// # Errors
/// Returns a [`TokenError`] when the claims are unreadable or out of range.
pub fn expires_at(token: &str) -> Result<DateTime<Utc>, TokenError> {
    let claims = decode_claims(token)?;
    DateTime::from_timestamp(claims.exp, 0).ok_or(TokenError::ExpiryRange(claims.exp))
}

/// Whether `token` is present, well-formed, and expires strictly after `now`.
#[must_use]
pub fn is_valid_at(token: Option<&str>, now: DateTime<Utc>) -> bool {
    token
        .and_then(|token| expires_at(token).ok())
        .is_some_and(|expiry| expiry > now)
}

/// [`is_valid_at`] against the current wall clock.
#[must_use]
pub fn is_valid(token: Option<&str>) -> bool {
    is_valid_at(token, Utc::now())
}

/// Build an unsigned token carrying `exp`, for fixtures and local tooling.
#[must_use]
pub fn unsigned_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#));
    format!("{header}.{payload}.unsigned")
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).single().expect("valid date")
    }

    #[test]
    fn past_expiry_is_invalid() {
        let token = unsigned_token(now().timestamp() - 1);
        assert!(!is_valid_at(Some(&token), now()));
    }

    #[test]
    fn expiry_equal_to_now_is_invalid() {
        let token = unsigned_token(now().timestamp());
        assert!(!is_valid_at(Some(&token), now()));
    }

    #[test]
    fn future_expiry_is_valid() {
        let token = unsigned_token(now().timestamp() + 60);
        assert!(is_valid_at(Some(&token), now()));
    }

    #[test]
    fn absent_and_malformed_tokens_are_invalid() {
        assert!(!is_valid_at(None, now()));
        assert!(!is_valid_at(Some(""), now()));
        assert!(!is_valid_at(Some("not-a-token"), now()));
        assert!(!is_valid_at(Some("a.%%%.c"), now()));
        assert!(!is_valid_at(Some("a.b.c.d"), now()));
    }

    #[test]
    fn decode_reports_specific_failures() {
        assert_eq!(decode_claims("  "), Err(TokenError::Empty));
        assert_eq!(decode_claims("one.two"), Err(TokenError::Shape));
        assert_eq!(decode_claims("a.!!.c"), Err(TokenError::Encoding));
        let no_exp = format!("h.{}.s", URL_SAFE_NO_PAD.encode(br#"{"sub":"42"}"#));
        assert!(matches!(decode_claims(&no_exp), Err(TokenError::Claims(_))));
    }

    #[test]
    fn padded_payloads_decode() {
        let payload = URL_SAFE.encode(br#"{"exp":170000000}"#);
        assert!(payload.ends_with('='));
        let token = format!("h.{payload}.s");
        assert_eq!(decode_claims(&token).map(|claims| claims.exp), Ok(170_000_000));
    }

    #[test]
    fn out_of_range_expiry_is_rejected() {
        let token = unsigned_token(i64::MAX);
        assert_eq!(expires_at(&token), Err(TokenError::ExpiryRange(i64::MAX)));
        assert!(!is_valid_at(Some(&token), now()));
    }

    #[test]
    fn status_reports_activity() {
        assert!(SessionStatus::Active { expires_at: now() }.is_active());
        assert!(!SessionStatus::Anonymous.is_active());
        assert!(!SessionStatus::Expired.is_active());
    }
}
