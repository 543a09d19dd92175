//! Rohan Mobile Store API
//!
//! HTTP backend for the mobile catalog. The binary in `main.rs` loads
//! configuration, connects to MongoDB and serves [`build_router`].

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::{cors_layer_from_origins, create_router};

pub use config::Config;
pub use state::AppState;

/// Assemble every route with documentation, CORS and request tracing
pub fn build_router(state: AppState) -> eyre::Result<Router> {
    let cors = cors_layer_from_origins(&state.config.cors_origins)?;
    let root = api::root_routes(&state);
    let apis = api::routes(&state);

    Ok(create_router::<openapi::ApiDoc>(root, apis, cors))
}
