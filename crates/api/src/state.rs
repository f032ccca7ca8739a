use std::sync::Arc;

use crate::config::ServerConfig;
use crate::snapshot::SnapshotStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: unitconver_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Read-only per-category static snapshot cache.
    pub snapshots: Arc<SnapshotStore>,
}
