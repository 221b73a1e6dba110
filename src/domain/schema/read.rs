//! Projection of store-side records into the public read shapes.
//!
//! The store is free to hand back any record type as long as it can answer
//! field lookups by name; `RecordFields` is that capability. Projection
//! fails loudly when a field is missing or mistyped instead of papering
//! over a broken store contract with defaults.

use serde_json::Value;

use super::error::MappingError;
use super::user::{UserBase, UserRead, UserWithToken, DEFAULT_TOKEN_TYPE};
use crate::domain::entities::user::User;

/// A single field value surfaced by a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i64),
}

/// Field-getter capability for store-side records.
pub trait RecordFields {
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl RecordFields for User {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "user_id" => Some(FieldValue::Int(self.user_id)),
            "username" => Some(FieldValue::Text(&self.username)),
            "first_name" => Some(FieldValue::Text(&self.first_name)),
            "last_name" => Some(FieldValue::Text(&self.last_name)),
            "email" => Some(FieldValue::Text(&self.email)),
            _ => None,
        }
    }
}

/// Raw JSON objects qualify too, so records arriving from loosely typed
/// sources can be projected without an intermediate struct.
impl RecordFields for Value {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match self.get(name)? {
            Value::String(s) => Some(FieldValue::Text(s)),
            Value::Number(n) => n.as_i64().map(FieldValue::Int),
            _ => None,
        }
    }
}

fn text_field(record: &impl RecordFields, name: &'static str) -> Result<String, MappingError> {
    match record.field(name) {
        Some(FieldValue::Text(value)) => Ok(value.to_string()),
        Some(_) => Err(MappingError::WrongKind(name)),
        None => Err(MappingError::MissingField(name)),
    }
}

fn int_field(record: &impl RecordFields, name: &'static str) -> Result<i64, MappingError> {
    match record.field(name) {
        Some(FieldValue::Int(value)) => Ok(value),
        Some(_) => Err(MappingError::WrongKind(name)),
        None => Err(MappingError::MissingField(name)),
    }
}

/// Projects a store record into the public read shape. The password hash and
/// internal bookkeeping fields are never part of the projection.
pub fn serialize_read(record: &impl RecordFields) -> Result<UserRead, MappingError> {
    Ok(UserRead {
        base: UserBase {
            username: text_field(record, "username")?,
            first_name: text_field(record, "first_name")?,
            last_name: text_field(record, "last_name")?,
            email: text_field(record, "email")?,
        },
        user_id: int_field(record, "user_id")?,
    })
}

/// Composes `serialize_read` with token fields; `token_type` is "bearer".
pub fn serialize_with_token(
    record: &impl RecordFields,
    access_token: impl Into<String>,
) -> Result<UserWithToken, MappingError> {
    serialize_with_token_type(record, access_token, DEFAULT_TOKEN_TYPE)
}

/// Same as `serialize_with_token` with an explicit token type.
pub fn serialize_with_token_type(
    record: &impl RecordFields,
    access_token: impl Into<String>,
    token_type: impl Into<String>,
) -> Result<UserWithToken, MappingError> {
    Ok(UserWithToken {
        user: serialize_read(record)?,
        access_token: access_token.into(),
        token_type: token_type.into(),
    })
}
