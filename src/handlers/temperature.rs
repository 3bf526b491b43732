//! Temperature aggregate endpoint handlers.
//!
//! `/api/v1.0/{start}` and `/api/v1.0/{start}/{stop}` report the minimum,
//! average and maximum temperature observation over an inclusive date window.
//! The response is always a one-element array; when nothing falls inside the
//! window the three fields are null.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::{error_response, run_query};
use crate::dates::{format_date, parse_date_param};
use crate::error::Result;
use crate::logging::generate_request_id;
use crate::models::TemperatureSummary;
use crate::state::AppState;

/// Validated and normalised date window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub start: String,
    pub stop: Option<String>,
}

impl DateWindow {
    /// Parse the raw path segments. A reversed window is accepted and simply
    /// matches no rows.
    pub fn parse(start: &str, stop: Option<&str>) -> Result<Self> {
        let start = format_date(parse_date_param("start", start)?);
        let stop = stop
            .map(|stop| parse_date_param("stop", stop).map(format_date))
            .transpose()?;
        Ok(Self { start, stop })
    }
}

/// Handle GET /api/v1.0/{start} requests
pub async fn temperature_start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    summarize(state, "/api/v1.0/{start}", &start, None).await
}

/// Handle GET /api/v1.0/{start}/{stop} requests
pub async fn temperature_range_handler(
    State(state): State<Arc<AppState>>,
    Path((start, stop)): Path<(String, String)>,
) -> Response {
    summarize(state, "/api/v1.0/{start}/{stop}", &start, Some(&stop)).await
}

async fn summarize(
    state: Arc<AppState>,
    endpoint: &str,
    start: &str,
    stop: Option<&str>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let params = match stop {
        Some(stop) => format!("start={}, stop={}", start, stop),
        None => format!("start={}", start),
    };

    debug!(
        endpoint = endpoint,
        request_id = %request_id,
        params = %params,
        "Processing temperature summary request"
    );

    let window = match DateWindow::parse(start, stop) {
        Ok(window) => window,
        Err(error) => return error_response(error, endpoint, &request_id, Some(&params)),
    };

    let result = run_query(state.store.clone(), move |store| {
        store.temperature_summary(&window.start, window.stop.as_deref())
    })
    .await;

    match result {
        Ok(summary) => {
            info!(
                endpoint = endpoint,
                request_id = %request_id,
                params = %params,
                duration_us = start_time.elapsed().as_micros() as u64,
                matched = !summary.is_empty(),
                "Temperature summary request successful"
            );
            let body: Vec<TemperatureSummary> = vec![summary];
            Json(body).into_response()
        }
        Err(error) => error_response(error, endpoint, &request_id, Some(&params)),
    }
}
