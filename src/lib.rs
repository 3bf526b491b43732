//! # kona
//!
//! A small read-only JSON API over a Hawaii climate observations database.
//!
//! The database holds two tables, `station` and `measurement`, populated by
//! other tooling. kona answers a fixed set of queries over them:
//!
//! - `/api/v1.0/precipitation`: date and precipitation of every measurement
//! - `/api/v1.0/stations`: distinct station codes
//! - `/api/v1.0/tobs`: observations from the last year of data
//! - `/api/v1.0/{start}` and `/api/v1.0/{start}/{stop}`: min/avg/max temperature
//!
//! ## Architecture
//!
//! - **Store**: [`store::ClimateStore`] runs each query on its own short-lived
//!   SQLite session
//! - **Handlers**: one axum handler per endpoint, reshaping rows into JSON records
//! - **Router**: [`router::create_router`] wires the handlers to their paths

pub mod config;
pub mod dates;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod router;
pub mod schema;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{KonaError, Result};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_dataset_stats, log_error,
    log_operation_end, log_operation_start, log_request_error, log_timed_operation,
};
pub use models::{DatasetSummary, PrecipitationRecord, TemperatureSummary, TobsRecord};
pub use router::create_router;
pub use state::AppState;
pub use store::{ClimateStore, ObservationColumn, SqliteStore};
