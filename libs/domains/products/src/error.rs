use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    /// The store was never connected. Reads of the mobile catalog fall back to
    /// sample data instead of surfacing this.
    #[error("Database not available. Check DATABASE_URL and DATABASE_NAME environment variables")]
    DatabaseUnavailable,

    #[error("{0}")]
    Store(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<DatabaseError> for ProductError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Unavailable => ProductError::DatabaseUnavailable,
            other => ProductError::Store(other.to_string()),
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(msg) => AppError::UnprocessableEntity(msg),
            other => AppError::InternalServerError(other.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
