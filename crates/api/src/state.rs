use std::sync::Arc;

use suitebridge_store::RecordStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable; the store is behind an `Arc` so the
/// same instance backs every request.
#[derive(Clone)]
pub struct AppState {
    /// Record store backend every endpoint operates against.
    pub store: Arc<dyn RecordStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
