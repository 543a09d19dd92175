//! Root and greeting endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

pub const ROOT_MESSAGE: &str = "Rohan Mobile Store Backend is running";
pub const HELLO_MESSAGE: &str = "Hello from Rohan's backend API!";

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Store",
    responses((status = 200, body = MessageResponse))
)]
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: ROOT_MESSAGE,
    })
}

/// Greeting used by the frontend to check connectivity
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "Store",
    responses((status = 200, body = MessageResponse))
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: HELLO_MESSAGE,
    })
}

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

pub fn api_router() -> Router {
    Router::new().route("/hello", get(hello))
}
