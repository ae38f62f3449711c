/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses so that
 * handlers can return `Result<T, ApiError>` and bubble failures with `?`.
 *
 * # Response Format
 *
 * Error responses always use the same JSON envelope as success responses:
 * ```json
 * {
 *   "message": "Incorrect email or password",
 *   "success": false
 * }
 * ```
 *
 * Infrastructure failures are logged with their full detail and answered
 * with a generic message; domain errors pass their message through.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// The status comes from [`ApiError::status_code`], the body message
    /// from [`ApiError::public_message`]. Server-side failures are logged
    /// here so handlers never have to remember to.
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("request failed: {self:?}");
        }

        let body = serde_json::json!({
            "message": self.public_message(),
            "success": false,
        });

        (status, Json(body)).into_response()
    }
}

/// Convert an error into the `(StatusCode, message)` pair a client sees.
///
/// Test helper for asserting on handler failures without building a full
/// HTTP stack.
pub fn client_view(error: &ApiError) -> (StatusCode, String) {
    (error.status_code(), error.public_message())
}
