//! Maps the crate error umbrella onto HTTP responses.
//!
//! Validation failures carry the full field list in the body. Store and
//! mapping failures are collaborator contract problems: they are logged with
//! detail and answered with a generic 500 body, never leaked to the client.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use crate::error::{AuthError, HisabError};

impl ResponseError for HisabError {
    fn status_code(&self) -> StatusCode {
        match self {
            HisabError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HisabError::Auth(auth) => match auth {
                AuthError::InvalidCredentials
                | AuthError::MissingToken
                | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
                AuthError::Hash(_) | AuthError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            HisabError::UsernameTaken | HisabError::EmailTaken => StatusCode::CONFLICT,
            HisabError::UserNotFound => StatusCode::NOT_FOUND,
            HisabError::Mapping(_) | HisabError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            return HttpResponse::build(status).json(json!({
                "error": "internal server error"
            }));
        }

        match self {
            HisabError::Validation(validation) => HttpResponse::build(status).json(json!({
                "error": "validation failed",
                "fields": validation.errors,
            })),
            other => HttpResponse::build(status).json(json!({
                "error": other.to_string()
            })),
        }
    }
}
