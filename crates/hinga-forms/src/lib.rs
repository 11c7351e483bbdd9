#![forbid(unsafe_code)]

//! Form validation schemas for Hinga.
//!
//! A schema is built from a localized message fragment and evaluates a value
//! struct in one pass, reporting field-keyed errors. Schemas are pure: same
//! messages, same input, same report.
//!
//! # How it fits in the system
//! Screens resolve their message strings through `hinga-i18n` and hand the
//! relevant fragment to a schema factory here. This crate never looks up
//! messages itself, so validation stays locale-agnostic.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// RFC-shape email check: a non-empty local part, one `@`, and a dotted
/// domain. Deliberately a shape check, not full RFC 5322 parsing.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// The fields a login form can report errors on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Password,
}

/// A single validation failure, keyed by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Localized message fragment consumed by [`login_schema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginMessages {
    pub invalid_email: String,
    pub invalid_password: String,
}

/// Client-entered login form state. Transient; never persisted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginValues {
    pub email: String,
    pub password: String,
}

/// Structural validator over [`LoginValues`].
#[derive(Debug)]
pub struct LoginSchema {
    email_shape: Regex,
    messages: LoginMessages,
}

/// Build a login schema carrying the supplied localized messages.
///
/// Pure: the factory has no side effects and the schema holds no state
/// across [`LoginSchema::validate`] calls.
#[must_use]
pub fn login_schema(messages: LoginMessages) -> LoginSchema {
    let email_shape = Regex::new(EMAIL_PATTERN).expect("email shape regex");
    LoginSchema {
        email_shape,
        messages,
    }
}

impl LoginSchema {
    /// Evaluate `values` and report every failing field.
    ///
    /// Fields are checked independently (no short-circuit) and no
    /// normalization is applied: `" a@b.co "` is not a valid email and an
    /// all-whitespace password is still non-empty.
    #[must_use]
    pub fn validate(&self, values: &LoginValues) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if !self.email_shape.is_match(&values.email) {
            errors.push(FieldError {
                field: Field::Email,
                message: self.messages.invalid_email.clone(),
            });
        }

        if values.password.is_empty() {
            errors.push(FieldError {
                field: Field::Password,
                message: self.messages.invalid_password.clone(),
            });
        }

        errors
    }

    /// Convenience for callers that only care about pass/fail.
    #[must_use]
    pub fn is_valid(&self, values: &LoginValues) -> bool {
        self.validate(values).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Field, FieldError, LoginMessages, LoginValues, login_schema};

    fn messages() -> LoginMessages {
        LoginMessages {
            invalid_email: "Injiza imeyili yemewe".to_string(),
            invalid_password: "Ijambobanga rirakenewe".to_string(),
        }
    }

    fn values(email: &str, password: &str) -> LoginValues {
        LoginValues {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn valid_credentials_report_no_errors() {
        let schema = login_schema(messages());
        assert_eq!(schema.validate(&values("grower@hinga.rw", "s3cret")), vec![]);
        assert!(schema.is_valid(&values("a@b.co", "x")));
    }

    #[test]
    fn malformed_emails_report_exactly_the_supplied_message() {
        let schema = login_schema(messages());
        for email in ["", "grower", "grower@", "@hinga.rw", "grower@hinga", "a@b@c.co", "a b@c.co"] {
            let errors = schema.validate(&values(email, "s3cret"));
            assert_eq!(
                errors,
                vec![FieldError {
                    field: Field::Email,
                    message: "Injiza imeyili yemewe".to_string(),
                }],
                "email case: {email:?}"
            );
        }
    }

    #[test]
    fn empty_password_reports_exactly_the_supplied_message() {
        let schema = login_schema(messages());
        let errors = schema.validate(&values("grower@hinga.rw", ""));
        assert_eq!(
            errors,
            vec![FieldError {
                field: Field::Password,
                message: "Ijambobanga rirakenewe".to_string(),
            }]
        );
    }

    #[test]
    fn fields_are_checked_independently() {
        let schema = login_schema(messages());
        let errors = schema.validate(&values("", ""));
        let fields: Vec<Field> = errors.iter().map(|error| error.field).collect();
        assert_eq!(fields, vec![Field::Email, Field::Password]);
    }

    #[test]
    fn no_normalization_is_applied() {
        let schema = login_schema(messages());
        // Surrounding whitespace keeps the email invalid.
        assert!(!schema.is_valid(&values(" grower@hinga.rw ", "s3cret")));
        // A whitespace-only password counts as non-empty.
        assert!(schema.is_valid(&values("grower@hinga.rw", " ")));
    }
}
