use actix_web::{web, Scope};

use super::handlers::{
    change_password, current_user, login_user, register_user, update_current_user,
};
use crate::application::services::UserService;
use crate::infrastructure::driven::database::PostgresUserRepository;

type Service = UserService<PostgresUserRepository>;

pub fn auth_routes() -> Scope {
    web::scope("/api/auth")
        .route("/register", web::post().to(register_user::<Service>))
        .route("/login", web::post().to(login_user::<Service>))
        .route("/password", web::post().to(change_password::<Service>))
}

pub fn user_routes() -> Scope {
    web::scope("/api/users")
        .route("/me", web::get().to(current_user::<Service>))
        .route("/me", web::patch().to(update_current_user::<Service>))
}
