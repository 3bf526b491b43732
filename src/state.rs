//! Application state management for kona.
//!
//! The state is built once at startup and shared by every handler. It holds
//! the configuration and the data-access object the handlers query.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::error::Result;
use crate::store::{ClimateStore, ObservationColumn};

/// The main application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Data access for the climate tables
    pub store: Arc<dyn ClimateStore>,
    /// Column backing the `Tobs` field, resolved from the configuration
    pub tobs_column: ObservationColumn,
    /// When the state was created, reported as uptime by the heartbeat
    pub started_at: Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, store: Arc<dyn ClimateStore>) -> Result<Self> {
        let tobs_column = config.tobs_column()?;
        Ok(Self {
            config,
            store,
            tobs_column,
            started_at: Instant::now(),
        })
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, store: Arc<dyn ClimateStore>) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::new(config, store)?))
    }

    /// Validate that the database is reachable and has the expected tables
    pub fn validate(&self) -> Result<()> {
        self.store.check_schema()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("store", &self.store.describe())
            .field("tobs_column", &self.tobs_column)
            .finish()
    }
}
