//! Heartbeat endpoint handler.
//!
//! Returns server status information: uptime and what the configured database
//! currently holds.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::run_query;
use crate::logging::log_error;
use crate::models::DatasetSummary;
use crate::state::AppState;

/// Random ID identifying this server process
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Heartbeat response structure
#[derive(Debug, Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Database the API reads from
    pub database: String,
    /// Row counts and date bounds, absent when the database cannot be read
    pub dataset: Option<DatasetSummary>,
    /// "healthy", or "degraded" when the database query failed
    pub status: String,
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Json<HeartbeatResponse> {
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    let dataset = match run_query(state.store.clone(), |store| store.summary()).await {
        Ok(summary) => Some(summary),
        Err(error) => {
            log_error(&error, "heartbeat dataset summary");
            None
        }
    };
    let status = if dataset.is_some() { "healthy" } else { "degraded" };

    Json(HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: state.started_at.elapsed().as_secs(),
        database: state.store.describe(),
        dataset,
        status: status.to_string(),
    })
}
