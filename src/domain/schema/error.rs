use serde::Serialize;
use thiserror::Error;

/// Machine-readable reason attached to a single offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    Missing,
    WrongType,
    Empty,
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: FieldErrorCode,
    pub message: String,
}

impl FieldError {
    pub fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            code: FieldErrorCode::Missing,
            message: format!("field `{field}` is required"),
        }
    }

    pub fn wrong_type(field: &str, expected: &str) -> Self {
        Self {
            field: field.to_string(),
            code: FieldErrorCode::WrongType,
            message: format!("field `{field}` must be {expected}"),
        }
    }

    pub fn empty(field: &str) -> Self {
        Self {
            field: field.to_string(),
            code: FieldErrorCode::Empty,
            message: format!("field `{field}` must not be empty"),
        }
    }

    pub fn invalid_format(field: &str, expected: &str) -> Self {
        Self {
            field: field.to_string(),
            code: FieldErrorCode::InvalidFormat,
            message: format!("field `{field}` is not {expected}"),
        }
    }
}

/// User-correctable input rejection. Carries every offending field at once,
/// never just the first one encountered.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("validation failed on {} field(s): {}", .errors.len(), field_list(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(error: FieldError) -> Self {
        Self { errors: vec![error] }
    }

    /// Names of the offending fields, in report order.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

fn field_list(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A store-side record broke the projection contract. Not user-correctable;
/// callers treat this as fatal to the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("record is missing expected field `{0}`")]
    MissingField(&'static str),

    #[error("record field `{0}` has an unexpected type")]
    WrongKind(&'static str),
}
