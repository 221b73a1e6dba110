use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::domain::schema::{UserCreate, UserLogin, UserPassword, UserRead, UserUpdate, UserWithToken};
use crate::error::Result;

#[async_trait]
pub trait UserRegistrationUseCase: Send + Sync {
    async fn register_user(&self, new_user: UserCreate) -> Result<UserRead>;
}

#[async_trait]
pub trait UserAuthenticationUseCase: Send + Sync {
    async fn login(&self, credentials: UserLogin) -> Result<UserWithToken>;
    /// Resolves a bearer token back to the stored user.
    async fn authenticate(&self, token: &str) -> Result<User>;
}

#[async_trait]
pub trait UserProfileUseCase: Send + Sync {
    async fn get_profile(&self, user_id: i64) -> Result<UserRead>;
    async fn update_profile(&self, user_id: i64, changes: UserUpdate) -> Result<UserRead>;
}

#[async_trait]
pub trait UserPasswordUseCase: Send + Sync {
    async fn change_password(&self, user_id: i64, change: UserPassword) -> Result<()>;
}
