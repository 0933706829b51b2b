use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use dirscope_core::CoreError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Forbidden(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::Internal(msg) => {
                // Log the real error server-side, return generic message to client
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = ErrorBody {
            success: false,
            error: message,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NotFound(p) => AppError::NotFound(format!("path not found: {}", p.display())),
            CoreError::NotADirectory(p) => {
                AppError::NotFound(format!("not a directory: {}", p.display()))
            }
            // Whether anything exists outside the root is not revealed.
            CoreError::OutsideRoot(_) => AppError::NotFound("path not found".to_string()),
            CoreError::PermissionDenied(p) => {
                AppError::Forbidden(format!("permission denied: {}", p.display()))
            }
            CoreError::InvalidName(name) => AppError::NotFound(format!("invalid name: {name}")),
            CoreError::Io(e) => AppError::Internal(e.to_string()),
        }
    }
}
