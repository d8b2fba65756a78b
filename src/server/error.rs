//! Error-to-HTTP response conversion for the JSON API.
//!
//! Implements `IntoResponse` for [`signbridge_common::Error`] so that API
//! handlers can return `Result<T, AppError>` directly. Video serving uses
//! its own mapping in [`crate::streaming::direct::VideoError`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use signbridge_common::Error;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError(pub Error);

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.0,
                "Server error in API handler"
            );
        }

        let message = match &self.0 {
            Error::Validation(msg) | Error::Conflict(msg) => msg.clone(),
            other => other.to_string(),
        };

        let mut body = json!({
            "error": message,
            "code": self.0.code(),
        });
        if let Error::NoVideosResolved { missing_words } = &self.0 {
            body["missing_words"] = json!(missing_words);
        }

        (status, axum::Json(body)).into_response()
    }
}
