//! Sign-in credentials and required-field validation

use std::collections::BTreeMap;
use std::fmt;

use derive_more::Display;
use serde::Serialize;

/// Input fields of the sign-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Field {
    #[display("Email")]
    Email,
    #[display("Password")]
    Password,
}

impl Field {
    /// Form control name, also the JSON key in the request body
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Message shown next to the input when it is left empty
    pub fn required_message(self) -> &'static str {
        match self {
            Field::Email => "Email is required",
            Field::Password => "Password is required",
        }
    }
}

/// Validation messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Set or clear the message for one field
    pub fn set(&mut self, field: Field, message: Option<&'static str>) {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

/// Required check for a single field.
///
/// Only the empty string fails; whitespace is left for the backend to judge.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    value.is_empty().then(|| field.required_message())
}

/// Email and password submitted to the authentication endpoint
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignInCredentials {
    pub email: String,
    pub password: String,
}

impl SignInCredentials {
    /// Build credentials from raw input, or report every missing field.
    pub fn validate(email: &str, password: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.set(Field::Email, validate_field(Field::Email, email));
        errors.set(Field::Password, validate_field(Field::Password, password));

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

impl fmt::Debug for SignInCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_fields_empty() {
        let errors = SignInCredentials::validate("", "").unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
    }

    #[test]
    fn test_only_password_filled() {
        let errors = SignInCredentials::validate("", "secret").unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Password), None);
    }

    #[test]
    fn test_only_email_filled() {
        let errors = SignInCredentials::validate("a@b.com", "").unwrap_err();

        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![(Field::Password, "Password is required")]
        );
    }

    #[test]
    fn test_valid_credentials() {
        let credentials = SignInCredentials::validate("a@b.com", "x").unwrap();

        assert_eq!(credentials.email, "a@b.com");
        assert_eq!(credentials.password, "x");
    }

    #[test]
    fn test_whitespace_passes_required_check() {
        assert!(validate_field(Field::Email, " ").is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = SignInCredentials::validate("a@b.com", "hunter2").unwrap();
        let debug_str = format!("{:?}", credentials);

        assert!(debug_str.contains("a@b.com"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_serializes_as_request_body() {
        let credentials = SignInCredentials::validate("a@b.com", "x").unwrap();
        let json = serde_json::to_value(&credentials).unwrap();

        assert_eq!(json, serde_json::json!({ "email": "a@b.com", "password": "x" }));
    }

    #[test]
    fn test_field_labels_and_names() {
        assert_eq!(Field::Email.to_string(), "Email");
        assert_eq!(Field::Password.to_string(), "Password");
        assert_eq!(Field::Email.name(), "email");
        assert_eq!(Field::Password.name(), "password");
    }

    #[test]
    fn test_field_errors_set_and_clear() {
        let mut errors = FieldErrors::default();
        errors.set(Field::Email, Some("Email is required"));
        assert!(!errors.is_empty());

        errors.set(Field::Email, None);
        assert!(errors.is_empty());
    }
}
