use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Covers unknown username, wrong password and wrong old password alike,
    /// so the response never reveals which part was wrong.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid or expired bearer token")]
    InvalidToken,

    #[error("password hashing error: {0}")]
    Hash(String),

    #[error("token issuance error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}
