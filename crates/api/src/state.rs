use std::sync::Arc;

use crate::config::ServerConfig;
use crate::metrics::AttendanceCounters;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: rollcall_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process-wide attendance counters, scraped by `/metrics`.
    pub metrics: Arc<AttendanceCounters>,
}
