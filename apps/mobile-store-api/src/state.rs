//! Application state management

use database::mongodb::DocumentStore;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state
///
/// The store is created once at startup and injected here; handlers never
/// reach for a global connection.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self { config, store }
    }
}
