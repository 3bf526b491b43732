//! Data access for the climate database.
//!
//! Handlers never talk to SQLite directly. They go through [`ClimateStore`],
//! which has one method per query the API runs, so the route layer can be
//! exercised against an in-memory double in tests.

pub mod sqlite;

#[cfg(test)]
pub(crate) mod memory;

use std::fmt;
use std::str::FromStr;

use crate::error::{KonaError, Result};
use crate::models::{DatasetSummary, PrecipitationRecord, TemperatureSummary, TobsRecord};

pub use sqlite::SqliteStore;

/// Measurement column reported as `Tobs` by the tobs endpoint.
///
/// The published API has always filled `Tobs` from the precipitation column.
/// `Temperature` switches it to the temperature observation column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObservationColumn {
    #[default]
    Precipitation,
    Temperature,
}

impl ObservationColumn {
    /// Column name in the measurement table
    pub fn column_name(&self) -> &'static str {
        match self {
            ObservationColumn::Precipitation => "prcp",
            ObservationColumn::Temperature => "tobs",
        }
    }
}

impl FromStr for ObservationColumn {
    type Err = KonaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "precipitation" | "prcp" => Ok(ObservationColumn::Precipitation),
            "temperature" | "tobs" => Ok(ObservationColumn::Temperature),
            other => Err(KonaError::Config {
                message: format!(
                    "Invalid tobs source: {}. Must be one of: precipitation, temperature",
                    other
                ),
            }),
        }
    }
}

impl fmt::Display for ObservationColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservationColumn::Precipitation => write!(f, "precipitation"),
            ObservationColumn::Temperature => write!(f, "temperature"),
        }
    }
}

/// Read-only queries over the station and measurement tables.
///
/// Date arguments are zero-padded `YYYY-MM-DD` strings; bounds are inclusive.
pub trait ClimateStore: Send + Sync {
    /// Date and precipitation of every measurement, in storage order
    fn precipitation(&self) -> Result<Vec<PrecipitationRecord>>;

    /// Distinct station codes in ascending order
    fn stations(&self) -> Result<Vec<String>>;

    /// Most recent measurement date, `None` if there are no measurements
    fn latest_date(&self) -> Result<Option<String>>;

    /// Date and `column` of every measurement on or after `cutoff`
    fn observations_since(
        &self,
        cutoff: &str,
        column: ObservationColumn,
    ) -> Result<Vec<TobsRecord>>;

    /// Min/avg/max temperature over measurements dated `start..=stop`
    /// (open-ended when `stop` is `None`)
    fn temperature_summary(&self, start: &str, stop: Option<&str>) -> Result<TemperatureSummary>;

    /// Row counts and date bounds
    fn summary(&self) -> Result<DatasetSummary>;

    /// Fail unless the expected tables and columns are present
    fn check_schema(&self) -> Result<()>;

    /// Human readable location of the data, used in logs and the heartbeat
    fn describe(&self) -> String;
}
