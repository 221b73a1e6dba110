use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// Fields shared by the creation and read shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBase {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Registration payload. The password is plaintext at this boundary;
/// hashing it belongs to the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreate {
    #[serde(flatten)]
    pub base: UserBase,
    pub password: String,
}

/// Public projection of a stored user. `user_id` is assigned by the store
/// on creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRead {
    #[serde(flatten)]
    pub base: UserBase,
    pub user_id: i64,
}

/// Login response: the public user plus an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithToken {
    pub user: UserRead,
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_string()
}

/// Partial profile update. `None` means the field was absent from the
/// payload and the stored value is left unchanged; an explicit JSON null
/// never reaches this struct (the validator rejects it as a wrong type).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserUpdate {
    /// True when no field was provided, i.e. the update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPassword {
    pub old_password: String,
    pub new_password: String,
}
