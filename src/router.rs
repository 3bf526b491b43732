//! Route table for the kona HTTP API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers::{
    heartbeat_handler, index_handler, not_found_handler, precipitation_handler, stations_handler,
    temperature_range_handler, temperature_start_handler, tobs_handler,
};
use crate::logging::create_http_trace_layer;
use crate::state::AppState;

/// Build the application router.
///
/// The fixed `/api/v1.0/...` routes take priority over the `{start}` capture,
/// so `/api/v1.0/stations` never reaches the temperature handler.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(temperature_start_handler))
        .route("/api/v1.0/:start/:stop", get(temperature_range_handler))
        .fallback(not_found_handler)
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
