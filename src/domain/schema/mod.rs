//! Request/response shapes for the account API and the validation and
//! projection operations over them. Everything here is pure and synchronous;
//! persistence and credential handling live behind their own ports.

pub mod error;
pub mod read;
pub mod rules;
pub mod user;

pub use error::FieldError;
pub use error::FieldErrorCode;
pub use error::MappingError;
pub use error::ValidationError;
pub use read::serialize_read;
pub use read::serialize_with_token;
pub use read::serialize_with_token_type;
pub use read::FieldValue;
pub use read::RecordFields;
pub use rules::validate_create;
pub use rules::validate_login;
pub use rules::validate_password_change;
pub use rules::validate_update;
pub use user::UserBase;
pub use user::UserCreate;
pub use user::UserLogin;
pub use user::UserPassword;
pub use user::UserRead;
pub use user::UserUpdate;
pub use user::UserWithToken;
