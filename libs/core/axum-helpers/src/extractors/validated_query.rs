//! Query-string extractor with validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query-string counterpart of [`ValidatedJson`](super::ValidatedJson).
///
/// Unparsable values (e.g. `limit=abc`) and failed constraints both answer 422.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state).await?;
        data.validate().map_err(AppError::query_validation)?;
        Ok(ValidatedQuery(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Page {
        #[validate(range(min = 1))]
        limit: i64,
    }

    async fn status_for(uri: &str) -> StatusCode {
        let app = Router::new().route(
            "/",
            get(|ValidatedQuery(p): ValidatedQuery<Page>| async move { p.limit.to_string() }),
        );
        let request = axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_query_validation() {
        assert_eq!(status_for("/?limit=5").await, StatusCode::OK);
        assert_eq!(status_for("/?limit=0").await, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_for("/?limit=abc").await, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
