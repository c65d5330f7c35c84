use std::sync::Arc;

use shelf_db::BookStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Book storage backend. The production binary injects the PostgreSQL
    /// adapter; tests inject the in-memory one.
    pub store: Arc<dyn BookStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
