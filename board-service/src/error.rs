use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::validators::FieldErrors;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("username already taken")]
    UsernameTaken,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("unauthenticated")]
    Unauthenticated,

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("server start failure: {0}")]
    StartServer(String),
}

impl ResponseError for BoardError {
    fn status_code(&self) -> StatusCode {
        match self {
            BoardError::Validation(_) => StatusCode::BAD_REQUEST,
            BoardError::UsernameTaken => StatusCode::CONFLICT,
            BoardError::InvalidCredentials | BoardError::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            BoardError::Database(_)
            | BoardError::Internal(_)
            | BoardError::Config(_)
            | BoardError::StartServer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            BoardError::Validation(fields) => json!({ "errors": fields }),
            BoardError::UsernameTaken => json!({ "error": "Username already taken" }),
            // Unknown-user and wrong-password share one body so responses
            // cannot be used to enumerate usernames.
            BoardError::InvalidCredentials => json!({ "error": "Invalid credentials" }),
            BoardError::Unauthenticated => json!({ "error": "Invalid token" }),
            // Never serialize storage or hashing detail to clients.
            BoardError::Database(_)
            | BoardError::Internal(_)
            | BoardError::Config(_)
            | BoardError::StartServer(_) => json!({ "error": "Internal server error" }),
        };

        HttpResponse::build(status).json(body)
    }
}

impl From<sqlx::Error> for BoardError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", err);
        BoardError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            BoardError::Validation(FieldErrors(BTreeMap::new())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(BoardError::UsernameTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            BoardError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BoardError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BoardError::Database("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn storage_detail_is_not_leaked() {
        let err = BoardError::Database("password_hash column corrupt".into());
        let resp = err.error_response();
        let bytes = actix_web::body::to_bytes(resp.into_body())
            .await
            .expect("body");
        let text = String::from_utf8_lossy(&bytes);
        assert!(!text.contains("password_hash"));
        assert!(text.contains("Internal server error"));
    }
}
