pub mod auth;
pub mod store;

use thiserror::Error;

pub use auth::AuthError;
pub use store::StoreError;

pub use crate::domain::schema::error::MappingError;
pub use crate::domain::schema::error::ValidationError;

/// Crate-wide error umbrella. The web layer maps each variant onto an HTTP
/// status; everything below the web layer stays transport-agnostic.
#[derive(Error, Debug)]
pub enum HisabError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("username is already taken")]
    UsernameTaken,

    #[error("a user with this email already exists")]
    EmailTaken,

    #[error("user not found")]
    UserNotFound,
}

pub type Result<T> = std::result::Result<T, HisabError>;
