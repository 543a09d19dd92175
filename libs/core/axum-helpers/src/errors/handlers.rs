use axum::response::{IntoResponse, Response};

use super::AppError;

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    AppError::NotFound("Not Found".to_string()).into_response()
}
