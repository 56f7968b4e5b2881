//! Sign-up and login forms.
//!
//! These forms only run field checks; credential and uniqueness checks go
//! through the auth service, and the handlers fold its outcome back into the
//! same [`FormErrors`] map.

use serde::Deserialize;

use grocery_core::Username;

use super::FormErrors;

/// Raw sign-up form fields as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Raw login form fields as submitted.
///
/// `next` carries the destination captured by the redirect-to-login, as a
/// hidden input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub next: String,
}

fn check_username(username: &str, errors: &mut FormErrors) {
    if username.is_empty() {
        errors.add("username", "Username is required.");
        return;
    }
    let len = username.chars().count();
    if !(Username::MIN_LENGTH..=Username::MAX_LENGTH).contains(&len) {
        errors.add(
            "username",
            format!(
                "Username must be between {} and {} characters.",
                Username::MIN_LENGTH,
                Username::MAX_LENGTH
            ),
        );
    }
}

fn check_password(password: &str, errors: &mut FormErrors) {
    if password.is_empty() {
        errors.add("password", "Password is required.");
    }
}

impl SignUpForm {
    /// Run the field-presence and length rules.
    #[must_use]
    pub fn field_errors(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        check_username(&self.username, &mut errors);
        check_password(&self.password, &mut errors);
        errors
    }
}

impl LoginForm {
    /// Run the field-presence and length rules.
    #[must_use]
    pub fn field_errors(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        check_username(&self.username, &mut errors);
        check_password(&self.password, &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sign_up_fields() {
        let form = SignUpForm {
            username: "alice".to_owned(),
            password: "secret123".to_owned(),
        };
        assert!(form.field_errors().is_empty());
    }

    #[test]
    fn test_username_length_bounds() {
        let form = SignUpForm {
            username: "ab".to_owned(),
            password: "secret123".to_owned(),
        };
        assert!(form.field_errors().first("username").is_some());

        let form = SignUpForm {
            username: "a".repeat(51),
            password: "secret123".to_owned(),
        };
        assert!(form.field_errors().first("username").is_some());
    }

    #[test]
    fn test_missing_fields_each_get_a_message() {
        let errors = LoginForm::default().field_errors();
        assert_eq!(errors.first("username"), Some("Username is required."));
        assert_eq!(errors.first("password"), Some("Password is required."));
    }

    #[test]
    fn test_password_has_no_composition_rules() {
        let form = SignUpForm {
            username: "alice".to_owned(),
            password: "x".to_owned(),
        };
        assert!(form.field_errors().is_empty());
    }
}
