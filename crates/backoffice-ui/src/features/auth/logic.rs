//! Sign-in form validation and response interpretation.

use crate::features::users::state::looks_like_email;
use backoffice_api_models::{SignInRequest, SignInResponse};

/// Mutable sign-in form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
}

impl SignInForm {
    /// Convert the form into sign-in credentials.
    ///
    /// # Errors
    /// Returns a message when the email is malformed or the password blank.
    pub fn to_request(&self) -> Result<SignInRequest, String> {
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err("enter the email you sign in with".to_string());
        }
        if self.password.is_empty() {
            return Err("password is required".to_string());
        }
        Ok(SignInRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// What a sign-in response means for the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
    /// A token was issued.
    Token(String),
    /// The backend refused; carries the message to show.
    Rejected(String),
}

/// Interpret a sign-in body. A backend-reported error wins over a token.
#[must_use]
pub fn interpret_sign_in(response: &SignInResponse) -> SignInOutcome {
    if response.error.is_some() {
        return SignInOutcome::Rejected(rejection_message(response));
    }
    match response
        .access_token
        .as_deref()
        .map(str::trim)
        .filter(|token| !token.is_empty())
    {
        Some(token) => SignInOutcome::Token(token.to_string()),
        None => SignInOutcome::Rejected(rejection_message(response)),
    }
}

fn rejection_message(response: &SignInResponse) -> String {
    response
        .message
        .clone()
        .or_else(|| response.error.clone())
        .unwrap_or_else(|| "sign-in failed".to_string())
}
