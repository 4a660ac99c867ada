//! Completes [`StandardError`] bodies with the URI path of the request.
//!
//! Handlers never see the request URI when they fail, so
//! [`AppError`](crate::error::AppError) attaches its envelope to the response
//! extensions and this middleware re-renders it with `path` set.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::StandardError;

/// Rewrite error responses so their envelope carries the request path.
///
/// Responses without a [`StandardError`] extension pass through untouched.
pub async fn stamp_error_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    let Some(envelope) = response.extensions_mut().remove::<StandardError>() else {
        return response;
    };

    tracing::debug!(
        status = envelope.status,
        error = %envelope.error,
        path = %path,
        "Request failed"
    );

    let (parts, _) = response.into_parts();
    let (_, body) = Json(StandardError { path, ..envelope })
        .into_response()
        .into_parts();
    Response::from_parts(parts, body)
}
