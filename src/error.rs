use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned for every failure the client should not see the details of
pub const INSTANCE_ERROR: &str = "Instance error.";

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Missing required tables")]
    MissingSchema,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
}

impl AppError {
    /// Status code and client-facing message for this error
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, INSTANCE_ERROR),
            AppError::MissingSchema => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Missing user, main or record table",
            ),
            AppError::UserAlreadyExists => (StatusCode::BAD_REQUEST, "The ID already exists."),
            AppError::UserNotFound => (StatusCode::BAD_REQUEST, "ID not found"),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, *msg),
        }
    }
}

/// Implement IntoResponse to convert AppError into HTTP responses
///
/// This is the single place where storage failures become an opaque 500;
/// the full error only goes to the log.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(ref e) = self {
            tracing::error!("Database error: {:?}", e);
        }

        let (status, message) = self.status_and_message();
        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
