use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::ports::in_ports::{
    UserAuthenticationUseCase, UserPasswordUseCase, UserProfileUseCase, UserRegistrationUseCase,
};
use crate::domain::entities::user::{NewUserRecord, User};
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::schema::{
    self, UserCreate, UserLogin, UserPassword, UserRead, UserUpdate, UserWithToken,
};
use crate::domain::services::auth_service::AuthService;
use crate::error::{AuthError, HisabError, Result};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
    iat: i64,
}

pub struct UserService<R: UserRepository> {
    user_repository: Arc<R>,
    jwt_secret: String,
    token_expiration_hours: i64,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(user_repository: Arc<R>, jwt_secret: String, token_expiration_hours: i64) -> Self {
        Self {
            user_repository,
            jwt_secret,
            token_expiration_hours,
        }
    }

    fn issue_token(&self, user_id: i64) -> Result<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.token_expiration_hours);
        let claims = Claims {
            sub: user_id.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(AuthError::from)?;

        Ok(token)
    }

    fn decode_token(&self, token: &str) -> Result<i64> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        token_data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| AuthError::InvalidToken.into())
    }
}

#[async_trait]
impl<R: UserRepository> UserRegistrationUseCase for UserService<R> {
    async fn register_user(&self, new_user: UserCreate) -> Result<UserRead> {
        if self
            .user_repository
            .find_by_username(&new_user.base.username)
            .await?
            .is_some()
        {
            return Err(HisabError::UsernameTaken);
        }

        if self
            .user_repository
            .find_by_email(&new_user.base.email)
            .await?
            .is_some()
        {
            return Err(HisabError::EmailTaken);
        }

        let password_hash = AuthService::hash_password(&new_user.password)?;

        let record = NewUserRecord {
            username: new_user.base.username,
            first_name: new_user.base.first_name,
            last_name: new_user.base.last_name,
            email: new_user.base.email,
            password_hash,
        };

        let created = self.user_repository.create(&record).await?;
        tracing::info!(user_id = created.user_id, "registered new user");

        Ok(schema::serialize_read(&created)?)
    }
}

#[async_trait]
impl<R: UserRepository> UserAuthenticationUseCase for UserService<R> {
    async fn login(&self, credentials: UserLogin) -> Result<UserWithToken> {
        let user = match self
            .user_repository
            .find_by_username(&credentials.username)
            .await?
        {
            Some(user) => user,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !AuthService::verify_password(&credentials.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.issue_token(user.user_id)?;

        Ok(schema::serialize_with_token(&user, token)?)
    }

    async fn authenticate(&self, token: &str) -> Result<User> {
        let user_id = self.decode_token(token)?;

        // A token for a user that no longer exists is as good as no token.
        match self.user_repository.get(user_id).await? {
            Some(user) => Ok(user),
            None => Err(AuthError::InvalidToken.into()),
        }
    }
}

#[async_trait]
impl<R: UserRepository> UserProfileUseCase for UserService<R> {
    async fn get_profile(&self, user_id: i64) -> Result<UserRead> {
        match self.user_repository.get(user_id).await? {
            Some(user) => Ok(schema::serialize_read(&user)?),
            None => Err(HisabError::UserNotFound),
        }
    }

    async fn update_profile(&self, user_id: i64, changes: UserUpdate) -> Result<UserRead> {
        let existing = match self.user_repository.get(user_id).await? {
            Some(user) => user,
            None => return Err(HisabError::UserNotFound),
        };

        if changes.is_empty() {
            return Ok(schema::serialize_read(&existing)?);
        }

        if let Some(email) = &changes.email {
            if let Some(other) = self.user_repository.find_by_email(email).await? {
                if other.user_id != user_id {
                    return Err(HisabError::EmailTaken);
                }
            }
        }

        let updated = self.user_repository.update(user_id, &changes).await?;

        Ok(schema::serialize_read(&updated)?)
    }
}

#[async_trait]
impl<R: UserRepository> UserPasswordUseCase for UserService<R> {
    async fn change_password(&self, user_id: i64, change: UserPassword) -> Result<()> {
        let user = match self.user_repository.get(user_id).await? {
            Some(user) => user,
            None => return Err(HisabError::UserNotFound),
        };

        if !AuthService::verify_password(&change.old_password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let password_hash = AuthService::hash_password(&change.new_password)?;
        self.user_repository
            .set_password(user_id, &password_hash)
            .await?;
        tracing::info!(user_id, "password changed");

        Ok(())
    }
}
