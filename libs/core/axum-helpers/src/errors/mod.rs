pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response body.
///
/// `detail` is a plain message for most errors and a list of [`FieldError`]
/// for validation failures.
///
/// ```json
/// { "detail": "Database not available" }
/// { "detail": [{ "loc": ["body", "price"], "msg": "must be at least 0", "type": "range" }] }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(value_type = Object)]
    pub detail: Value,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            detail: Value::String(message.into()),
        }
    }
}

/// One failed constraint in a request body or query string
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    /// Where the value came from, then the field name, e.g. `["body", "title"]`
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Request part a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Query,
}

impl Location {
    fn as_str(self) -> &'static str {
        match self {
            Location::Body => "body",
            Location::Query => "query",
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {errors}")]
    Validation {
        location: Location,
        errors: ValidationErrors,
    },

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn body_validation(errors: ValidationErrors) -> Self {
        AppError::Validation {
            location: Location::Body,
            errors,
        }
    }

    pub fn query_validation(errors: ValidationErrors) -> Self {
        AppError::Validation {
            location: Location::Query,
            errors,
        }
    }
}

/// Flatten validator errors into `FieldError`s, sorted by field name
pub fn field_errors(location: Location, errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| FieldError {
                loc: vec![location.as_str().to_string(), field.to_string()],
                msg: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", err.code)),
                kind: err.code.to_string(),
            })
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!("JSON extraction error: {}", e.body_text());
                (e.status(), Value::String(e.body_text()))
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::info!("Query extraction error: {}", e.body_text());
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Value::String(e.body_text()),
                )
            }
            AppError::Validation { location, errors } => {
                tracing::info!("Validation error: {}", errors);
                let fields = field_errors(location, &errors);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    serde_json::to_value(fields).unwrap_or(Value::Null),
                )
            }
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, Value::String(msg))
            }
            AppError::UnprocessableEntity(msg) => {
                tracing::info!("Unprocessable entity: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, Value::String(msg))
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, Value::String(msg))
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 1))]
        title: String,
        #[validate(range(min = 0.0, message = "must not be negative"))]
        price: f64,
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_internal_error_renders_raw_message_as_detail() {
        let response = AppError::InternalServerError("write concern failed".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "detail": "write concern failed" })
        );
    }

    #[tokio::test]
    async fn test_validation_error_lists_fields() {
        let errors = Payload {
            title: String::new(),
            price: -1.0,
        }
        .validate()
        .unwrap_err();

        let response = AppError::body_validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        let detail = body["detail"].as_array().unwrap();
        assert_eq!(detail.len(), 2);
        assert_eq!(detail[0]["loc"], serde_json::json!(["body", "price"]));
        assert_eq!(detail[0]["msg"], "must not be negative");
        assert_eq!(detail[0]["type"], "range");
        assert_eq!(detail[1]["loc"], serde_json::json!(["body", "title"]));
        assert_eq!(detail[1]["type"], "length");
    }

    #[test]
    fn test_field_errors_use_query_location() {
        let errors = Payload {
            title: String::new(),
            price: 1.0,
        }
        .validate()
        .unwrap_err();

        let fields = field_errors(Location::Query, &errors);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].loc, vec!["query", "title"]);
        assert_eq!(fields[0].msg, "invalid value (length)");
    }
}
