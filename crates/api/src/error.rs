use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use ordem_core::error::CoreError;
use ordem_core::types::Timestamp;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform [`StandardError`] body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ordem_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request the server could not decode (body, path or query).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response.
///
/// `path` is left empty here and filled in by
/// [`stamp_error_path`](crate::middleware::error_envelope::stamp_error_path),
/// which is the only place that sees the request URI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardError {
    pub timestamp: Timestamp,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

/// Outcome of mapping an error onto HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClass {
    pub status: StatusCode,
    /// Short fixed label per error kind.
    pub label: &'static str,
    pub message: String,
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// The single error-kind → status table for the whole API.
    pub fn classify(&self) -> ErrorClass {
        let (status, label, message) = match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    "Resource not found",
                    core.to_string(),
                ),
                CoreError::Integrity(_) => (
                    StatusCode::BAD_REQUEST,
                    "Database exception",
                    core.to_string(),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "Validation error", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal error",
                        INTERNAL_MESSAGE.to_string(),
                    )
                }
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad request", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        ErrorClass {
            status,
            label,
            message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let class = self.classify();
        let body = StandardError {
            timestamp: Utc::now(),
            status: class.status.as_u16(),
            error: class.label.to_string(),
            message: class.message,
            path: String::new(),
        };

        let mut response = (class.status, Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
