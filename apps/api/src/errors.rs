use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to a 500 with a generic message; the detail only reaches the logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(#[from] AuthError),

    #[error("Session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::Authentication(e) => {
                tracing::error!("Error during Google OAuth: {e}");
                (
                    "AUTHENTICATION_ERROR",
                    "An error occurred during authentication.",
                )
            }
            AppError::Session(e) => {
                tracing::error!("Session store error: {e}");
                ("SESSION_ERROR", "A session error occurred")
            }
            AppError::Template(e) => {
                tracing::error!("Template rendering error: {e}");
                ("RENDER_ERROR", "The page could not be rendered")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                ("INTERNAL_ERROR", "An internal server error occurred")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
