//! `GET /test`: reports backend and database status as text

use axum::{extract::State, routing::get, Json, Router};
use database::mongodb::DocumentStore;
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Connectivity report. Never an error response; failures are reported in `database`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    #[schema(example = "✅ Running")]
    pub backend: String,
    #[schema(example = "✅ Connected & Working")]
    pub database: String,
    #[schema(example = "✅ Set")]
    pub database_url: String,
    #[schema(example = "✅ Set")]
    pub database_name: String,
    #[schema(example = "Connected")]
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn presence(set: bool) -> String {
    let label = if set { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

/// Check database connectivity
#[utoipa::path(
    get,
    path = "/test",
    tag = "Store",
    responses((status = 200, description = "Diagnostic report", body = DiagnosticsResponse))
)]
pub async fn test_connection(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut report = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "⚠️  Available but not initialized".to_string(),
        database_url: presence(state.config.database_url_set),
        database_name: presence(state.config.database_name_set),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if state.store.database_name().is_some() {
        report.connection_status = "Connected".to_string();

        match state.store.list_collection_names().await {
            Ok(names) => {
                report.collections = names.into_iter().take(MAX_COLLECTIONS).collect();
                report.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Diagnostic collection listing failed");
                let message: String = e.to_string().chars().take(MAX_ERROR_CHARS).collect();
                report.database = format!("⚠️  Connected but Error: {}", message);
            }
        }
    }

    Json(report)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(test_connection))
        .with_state(state)
}
