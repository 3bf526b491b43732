//! Temperature observations (tobs) endpoint handler.
//!
//! Returns the observations of the last year of data: every measurement dated
//! on or after the most recent measurement date minus one year. The query does
//! not filter by station. By default the `Tobs` field carries the
//! precipitation column, which is what existing clients of this endpoint
//! receive; `--tobs-source temperature` switches it to the temperature column.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::{error_response, run_query};
use crate::dates::{format_date, one_year_before, parse_stored_date};
use crate::error::Result;
use crate::logging::generate_request_id;
use crate::models::TobsRecord;
use crate::state::AppState;
use crate::store::{ClimateStore, ObservationColumn};

const ENDPOINT: &str = "/api/v1.0/tobs";

/// Start of the one-year window ending at `latest`
pub fn tobs_cutoff(latest: &str) -> Result<String> {
    let latest = parse_stored_date(latest)?;
    Ok(format_date(one_year_before(latest)?))
}

/// Observations from the last year of data, empty when there are no measurements
fn last_year_observations(
    store: &dyn ClimateStore,
    column: ObservationColumn,
) -> Result<Vec<TobsRecord>> {
    let latest = match store.latest_date()? {
        Some(latest) => latest,
        None => return Ok(Vec::new()),
    };
    let cutoff = tobs_cutoff(&latest)?;
    debug!(latest = %latest, cutoff = %cutoff, column = %column, "Computed tobs window");
    store.observations_since(&cutoff, column)
}

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let column = state.tobs_column;

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        column = %column,
        "Processing tobs request"
    );

    match run_query(state.store.clone(), move |store| {
        last_year_observations(store, column)
    })
    .await
    {
        Ok(records) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                row_count = records.len(),
                "Tobs request successful"
            );
            Json(records).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::handlers::test_support::{json_body, sample_store, state_with};
    use crate::store::memory::MemoryStore;
    use axum::http::StatusCode;

    #[test]
    fn test_tobs_cutoff() {
        assert_eq!(tobs_cutoff("2017-08-23").unwrap(), "2016-08-23");
        assert_eq!(tobs_cutoff("2016-02-29").unwrap(), "2015-02-28");
        assert!(tobs_cutoff("not-a-date").is_err());
    }

    #[tokio::test]
    async fn test_tobs_returns_last_year_of_precipitation() {
        let response = tobs_handler(State(state_with(sample_store()))).await;
        let (status, json) = json_body(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!([
                {"Date": "2016-08-23", "Tobs": 0.2},
                {"Date": "2017-01-01", "Tobs": 0.5},
                {"Date": "2017-06-01", "Tobs": null},
                {"Date": "2017-08-23", "Tobs": 0.0}
            ])
        );
    }

    #[tokio::test]
    async fn test_tobs_temperature_source() {
        let mut config = Config::default();
        config.data.tobs_source = "temperature".to_string();
        let state = AppState::new_shared(config, Arc::new(sample_store())).unwrap();

        let response = tobs_handler(State(state)).await;
        let (_, json) = json_body(response).await;

        let values: Vec<f64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["Tobs"].as_f64().unwrap())
            .collect();
        assert_eq!(values, vec![72.0, 65.0, 80.0, 81.0]);
    }

    #[tokio::test]
    async fn test_tobs_empty_table() {
        let response = tobs_handler(State(state_with(MemoryStore::default()))).await;
        let (status, json) = json_body(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_tobs_malformed_stored_date() {
        let store = MemoryStore::new(&[], &[("17/08/2017", Some(0.1), Some(70.0))]);

        let response = tobs_handler(State(state_with(store))).await;
        let (status, json) = json_body(response).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].as_str().unwrap().contains("malformed"));
    }
}
