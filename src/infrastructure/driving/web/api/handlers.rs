use std::sync::Arc;

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;

use crate::application::ports::in_ports::{
    UserAuthenticationUseCase, UserPasswordUseCase, UserProfileUseCase, UserRegistrationUseCase,
};
use crate::domain::schema;
use crate::error::{AuthError, HisabError};

/// AppState containing our application services
pub struct AppState<T>
where
    T: UserRegistrationUseCase + UserAuthenticationUseCase + UserProfileUseCase + UserPasswordUseCase,
{
    pub user_service: Arc<T>,
}

/// Pulls the token out of an `Authorization: Bearer …` header.
fn bearer_token(req: &HttpRequest) -> Result<&str, AuthError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;
    let value = header.to_str().map_err(|_| AuthError::MissingToken)?;
    value.strip_prefix("Bearer ").ok_or(AuthError::MissingToken)
}

// Bodies are taken as raw JSON and run through the schema validator so a
// rejection reports every offending field, not just the first serde error.

pub async fn register_user<T>(
    data: web::Data<AppState<T>>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, HisabError>
where
    T: UserRegistrationUseCase + UserAuthenticationUseCase + UserProfileUseCase + UserPasswordUseCase,
{
    let new_user = schema::validate_create(&payload)?;
    let user = data.user_service.register_user(new_user).await?;

    Ok(HttpResponse::Created().json(user))
}

pub async fn login_user<T>(
    data: web::Data<AppState<T>>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, HisabError>
where
    T: UserRegistrationUseCase + UserAuthenticationUseCase + UserProfileUseCase + UserPasswordUseCase,
{
    let credentials = schema::validate_login(&payload)?;
    let with_token = data.user_service.login(credentials).await?;

    Ok(HttpResponse::Ok().json(with_token))
}

pub async fn change_password<T>(
    req: HttpRequest,
    data: web::Data<AppState<T>>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, HisabError>
where
    T: UserRegistrationUseCase + UserAuthenticationUseCase + UserProfileUseCase + UserPasswordUseCase,
{
    let token = bearer_token(&req)?;
    let user = data.user_service.authenticate(token).await?;

    let change = schema::validate_password_change(&payload)?;
    data.user_service
        .change_password(user.user_id, change)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub async fn current_user<T>(
    req: HttpRequest,
    data: web::Data<AppState<T>>,
) -> Result<HttpResponse, HisabError>
where
    T: UserRegistrationUseCase + UserAuthenticationUseCase + UserProfileUseCase + UserPasswordUseCase,
{
    let token = bearer_token(&req)?;
    let user = data.user_service.authenticate(token).await?;
    let profile = data.user_service.get_profile(user.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

pub async fn update_current_user<T>(
    req: HttpRequest,
    data: web::Data<AppState<T>>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, HisabError>
where
    T: UserRegistrationUseCase + UserAuthenticationUseCase + UserProfileUseCase + UserPasswordUseCase,
{
    let token = bearer_token(&req)?;
    let user = data.user_service.authenticate(token).await?;

    let changes = schema::validate_update(&payload)?;
    let profile = data
        .user_service
        .update_profile(user.user_id, changes)
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}
