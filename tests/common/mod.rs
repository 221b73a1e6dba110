//! Shared fixtures and the mocked repository used by the integration tests.

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use hisab::domain::entities::user::{NewUserRecord, User};
use hisab::domain::repositories::user_repository::UserRepository;
use hisab::domain::schema::UserUpdate;
use hisab::error::StoreError;

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn create(&self, new_user: &NewUserRecord) -> Result<User, StoreError>;
        async fn get(&self, user_id: i64) -> Result<Option<User>, StoreError>;
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
        async fn update(&self, user_id: i64, changes: &UserUpdate) -> Result<User, StoreError>;
        async fn set_password(&self, user_id: i64, password_hash: &str) -> Result<(), StoreError>;
    }
}

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn stored_user(user_id: i64, password_hash: &str) -> User {
    let now = Utc::now();
    User {
        user_id,
        username: "amina".to_string(),
        first_name: "Amina".to_string(),
        last_name: "Haddad".to_string(),
        email: "amina@example.com".to_string(),
        password_hash: password_hash.to_string(),
        created_at: now,
        updated_at: now,
    }
}
