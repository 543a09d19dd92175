//! API routes module

pub mod diagnostics;
pub mod health;
pub mod products;
pub mod root;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

/// Routes mounted at the server root: `/`, `/test`, `/health`, `/ready`
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .merge(root::router())
        .merge(diagnostics::router(state.clone()))
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()))
}

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(root::api_router())
        .nest("/products", products::router(state))
}
