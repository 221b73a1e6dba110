use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::domain::entities::user::{NewUserRecord, User};
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::schema::UserUpdate;
use crate::error::StoreError;

const USER_COLUMNS: &str =
    "user_id, username, first_name, last_name, email, password_hash, created_at, updated_at";

pub struct PostgresUserRepository {
    pool: Arc<Pool<Postgres>>,
}

impl PostgresUserRepository {
    pub fn new(pool: Arc<Pool<Postgres>>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, new_user: &NewUserRecord) -> Result<User, StoreError> {
        let result = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, first_name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&new_user.username)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&*self.pool)
        .await?;

        Ok(result)
    }

    async fn get(&self, user_id: i64) -> Result<Option<User>, StoreError> {
        let result = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(result)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let result = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(result)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let result = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(result)
    }

    async fn update(&self, user_id: i64, changes: &UserUpdate) -> Result<User, StoreError> {
        // Absent fields arrive as NULL binds and COALESCE keeps the stored value.
        let result = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(changes.first_name.as_deref())
        .bind(changes.last_name.as_deref())
        .bind(changes.email.as_deref())
        .fetch_optional(&*self.pool)
        .await?;

        result.ok_or(StoreError::NotFound)
    }

    async fn set_password(&self, user_id: i64, password_hash: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE users SET password_hash = $2, updated_at = NOW() WHERE user_id = $1",
        )
        .bind(user_id)
        .bind(password_hash)
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
