//! New-user form state.

use backoffice_api_models::NewUser;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Mutable new-user form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewUserForm {
    /// Email input.
    pub email: String,
    /// Display name input.
    pub name: String,
    /// Password input.
    pub password: String,
}

impl NewUserForm {
    /// Convert the form into a create-user payload.
    ///
    /// # Errors
    /// Returns a message for a malformed email, blank name, or short password.
    pub fn to_payload(&self) -> Result<NewUser, String> {
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err("a valid email is required".to_string());
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err("name is required".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        Ok(NewUser {
            email: email.to_string(),
            name: name.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Cheap shape check; the backend owns real validation.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewUserForm {
        NewUserForm {
            email: " editor@example.com ".to_string(),
            name: "Editor".to_string(),
            password: "correct horse".to_string(),
        }
    }

    #[test]
    fn valid_form_trims_fields() {
        let payload = form().to_payload().expect("valid");
        assert_eq!(payload.email, "editor@example.com");
        assert_eq!(payload.name, "Editor");
    }

    #[test]
    fn rejects_bad_inputs() {
        let bad_email = NewUserForm {
            email: "editor".to_string(),
            ..form()
        };
        assert!(bad_email.to_payload().is_err());
        let short_password = NewUserForm {
            password: "short".to_string(),
            ..form()
        };
        assert!(short_password.to_payload().is_err());
        let no_name = NewUserForm {
            name: " ".to_string(),
            ..form()
        };
        assert!(no_name.to_payload().is_err());
    }
}
