use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database query error: {0}")]
    Query(#[from] sqlx::Error),

    #[error("user record not found")]
    NotFound,
}
