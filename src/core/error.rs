use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

/// Cause taxonomy for persistence failures, surfaced in the envelope `details`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteErrorKind {
    Duplicate,
    MissingRequired,
    ReferenceError,
    AccessDenied,
    Unknown,
}

impl WriteErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteErrorKind::Duplicate => "duplicate",
            WriteErrorKind::MissingRequired => "missing_required",
            WriteErrorKind::ReferenceError => "reference_error",
            WriteErrorKind::AccessDenied => "access_denied",
            WriteErrorKind::Unknown => "unknown",
        }
    }
}

/// Classify a PostgreSQL SQLSTATE into the write-failure taxonomy.
pub fn classify_sqlstate(code: &str) -> WriteErrorKind {
    match code {
        "23505" => WriteErrorKind::Duplicate,
        "23502" => WriteErrorKind::MissingRequired,
        "23503" => WriteErrorKind::ReferenceError,
        "42501" => WriteErrorKind::AccessDenied,
        _ => WriteErrorKind::Unknown,
    }
}

fn database_response(e: &sqlx::Error) -> (StatusCode, String, Option<serde_json::Value>) {
    if let Some(db) = e.as_database_error() {
        let code = db.code().map(|c| c.to_string()).unwrap_or_default();
        let kind = classify_sqlstate(&code);
        let details = json!({ "code": code, "kind": kind.as_str() });

        let (status, message) = match kind {
            WriteErrorKind::Duplicate => (
                StatusCode::CONFLICT,
                "A record with the same unique value already exists".to_string(),
            ),
            WriteErrorKind::MissingRequired => (
                StatusCode::BAD_REQUEST,
                "A required field is missing".to_string(),
            ),
            WriteErrorKind::ReferenceError => (
                StatusCode::BAD_REQUEST,
                "A referenced record does not exist".to_string(),
            ),
            WriteErrorKind::AccessDenied => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The data store rejected the operation".to_string(),
            ),
            WriteErrorKind::Unknown => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error occurred".to_string(),
            ),
        };
        return (status, message, Some(details));
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Database error occurred".to_string(),
        None,
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                database_response(e)
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Validation(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Auth(ref msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
            AppError::Unauthorized(ref msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
            AppError::Forbidden(ref msg) => (StatusCode::FORBIDDEN, msg.clone(), None),
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, msg.clone(), None),
            AppError::ExternalServiceError(ref msg) => {
                tracing::error!("External service error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg.clone(), None)
            }
        };

        let body = Json(ApiResponse::<()>::error(message, details));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_sqlstates() {
        assert_eq!(classify_sqlstate("23505"), WriteErrorKind::Duplicate);
        assert_eq!(classify_sqlstate("23502"), WriteErrorKind::MissingRequired);
        assert_eq!(classify_sqlstate("23503"), WriteErrorKind::ReferenceError);
        assert_eq!(classify_sqlstate("42501"), WriteErrorKind::AccessDenied);
    }

    #[test]
    fn test_classify_unknown_sqlstate() {
        assert_eq!(classify_sqlstate("40001"), WriteErrorKind::Unknown);
        assert_eq!(classify_sqlstate(""), WriteErrorKind::Unknown);
    }
}
