//! Rule-table validation of raw JSON payloads.
//!
//! Each request shape is described by a table of field rules checked against
//! the raw JSON object before deserialization, so every offending field is
//! reported in one pass instead of stopping at the first serde error.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::ValidateEmail;

use super::error::{FieldError, ValidationError};
use super::user::{UserCreate, UserLogin, UserPassword, UserUpdate};

#[derive(Debug, Clone, Copy)]
enum Presence {
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy)]
enum Constraint {
    /// Any string, empty allowed.
    Text,
    /// A string with at least one character.
    NonEmptyText,
    /// A syntactically valid email address.
    Email,
}

#[derive(Debug, Clone, Copy)]
struct FieldRule {
    name: &'static str,
    presence: Presence,
    constraint: Constraint,
}

const fn required(name: &'static str, constraint: Constraint) -> FieldRule {
    FieldRule { name, presence: Presence::Required, constraint }
}

const fn optional(name: &'static str, constraint: Constraint) -> FieldRule {
    FieldRule { name, presence: Presence::Optional, constraint }
}

const CREATE_RULES: &[FieldRule] = &[
    required("username", Constraint::Text),
    required("first_name", Constraint::Text),
    required("last_name", Constraint::Text),
    required("email", Constraint::Email),
    required("password", Constraint::Text),
];

const LOGIN_RULES: &[FieldRule] = &[
    required("username", Constraint::NonEmptyText),
    required("password", Constraint::NonEmptyText),
];

const UPDATE_RULES: &[FieldRule] = &[
    optional("first_name", Constraint::Text),
    optional("last_name", Constraint::Text),
    optional("email", Constraint::Email),
];

const PASSWORD_RULES: &[FieldRule] = &[
    required("old_password", Constraint::NonEmptyText),
    required("new_password", Constraint::NonEmptyText),
];

/// Checks a payload against a rule table, collecting every violation.
/// Unknown fields are ignored.
fn check_object(payload: &Value, rules: &[FieldRule]) -> Result<(), ValidationError> {
    let map = match payload.as_object() {
        Some(map) => map,
        None => {
            return Err(ValidationError::single(FieldError::wrong_type(
                "body",
                "a JSON object",
            )))
        }
    };

    let mut errors = Vec::new();
    for rule in rules {
        match map.get(rule.name) {
            None => {
                if matches!(rule.presence, Presence::Required) {
                    errors.push(FieldError::missing(rule.name));
                }
            }
            Some(Value::String(value)) => match rule.constraint {
                Constraint::Text => {}
                Constraint::NonEmptyText => {
                    if value.is_empty() {
                        errors.push(FieldError::empty(rule.name));
                    }
                }
                Constraint::Email => {
                    if !value.validate_email() {
                        errors.push(FieldError::invalid_format(rule.name, "a valid email address"));
                    }
                }
            },
            // Explicit null is a type violation, not an absent field.
            Some(_) => errors.push(FieldError::wrong_type(rule.name, "a string")),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}

/// Deserializes a payload that already passed its rule table. A failure here
/// means the table and the struct disagree, which is still surfaced as a
/// body-level validation error rather than a panic.
fn into_shape<T: DeserializeOwned>(payload: &Value) -> Result<T, ValidationError> {
    serde_json::from_value(payload.clone()).map_err(|e| {
        ValidationError::single(FieldError {
            field: "body".to_string(),
            code: super::error::FieldErrorCode::WrongType,
            message: format!("malformed request body: {e}"),
        })
    })
}

pub fn validate_create(payload: &Value) -> Result<UserCreate, ValidationError> {
    check_object(payload, CREATE_RULES)?;
    into_shape(payload)
}

pub fn validate_login(payload: &Value) -> Result<UserLogin, ValidationError> {
    check_object(payload, LOGIN_RULES)?;
    into_shape(payload)
}

pub fn validate_update(payload: &Value) -> Result<UserUpdate, ValidationError> {
    check_object(payload, UPDATE_RULES)?;
    into_shape(payload)
}

pub fn validate_password_change(payload: &Value) -> Result<UserPassword, ValidationError> {
    check_object(payload, PASSWORD_RULES)?;
    into_shape(payload)
}
