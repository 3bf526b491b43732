//! HTTP request handlers for the kona API.
//!
//! This module contains all the endpoint handlers for the web server, plus the
//! helpers they share for running store queries and reporting errors.

pub mod heartbeat;
pub mod index;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use heartbeat::heartbeat_handler;
pub use index::{index_handler, not_found_handler};
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use temperature::{temperature_range_handler, temperature_start_handler};
pub use tobs::tobs_handler;

use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

use crate::error::{KonaError, Result};
use crate::logging::log_request_error;
use crate::store::ClimateStore;

/// Run a store query on the blocking thread pool.
///
/// SQLite calls block, so they must stay off the async worker threads.
pub(crate) async fn run_query<T, F>(store: Arc<dyn ClimateStore>, query: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&dyn ClimateStore) -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || query(store.as_ref()))
        .await
        .map_err(|e| KonaError::Server {
            message: format!("Query task failed: {}", e),
        })?
}

/// Log a failed request and turn the error into a JSON response
pub(crate) fn error_response(
    error: KonaError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    (
        error.status_code(),
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
