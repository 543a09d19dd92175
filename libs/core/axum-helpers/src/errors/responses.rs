//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "detail": "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - Validation Error",
    content_type = "application/json",
    example = json!({
        "detail": [{
            "loc": ["body", "price"],
            "msg": "price must not be negative",
            "type": "range"
        }]
    })
)]
pub struct ValidationErrorResponse(pub ErrorResponse);
