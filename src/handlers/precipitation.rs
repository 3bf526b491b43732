//! Precipitation endpoint handler.
//!
//! Returns the date and precipitation of every measurement.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::{error_response, run_query};
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing precipitation request"
    );

    match run_query(state.store.clone(), |store| store.precipitation()).await {
        Ok(records) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                row_count = records.len(),
                "Precipitation request successful"
            );
            Json(records).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}
