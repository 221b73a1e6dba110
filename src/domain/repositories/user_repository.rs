use async_trait::async_trait;

use crate::domain::entities::user::{NewUserRecord, User};
use crate::domain::schema::UserUpdate;
use crate::error::StoreError;

/// Persistence port for user records. The store assigns `user_id` on create
/// and is the source of truth for uniqueness of username and email.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, new_user: &NewUserRecord) -> Result<User, StoreError>;
    async fn get(&self, user_id: i64) -> Result<Option<User>, StoreError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    /// Partial update: absent fields keep their stored value.
    async fn update(&self, user_id: i64, changes: &UserUpdate) -> Result<User, StoreError>;
    async fn set_password(&self, user_id: i64, password_hash: &str) -> Result<(), StoreError>;
}
