//! Records returned by the JSON endpoints.
//!
//! Field names are serialized in PascalCase (`Date`, `Precipitation`, ...) to
//! keep the public API stable for existing clients.

use serde::{Deserialize, Serialize};

/// One row of `/api/v1.0/precipitation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrecipitationRecord {
    pub date: String,
    /// Passed through as `null` when the reading is missing
    pub precipitation: Option<f64>,
}

/// One row of `/api/v1.0/tobs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TobsRecord {
    pub date: String,
    pub tobs: Option<f64>,
}

/// Min/average/max of the temperature observations over a date window.
///
/// All three fields are `null` when no measurement falls inside the window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemperatureSummary {
    pub min: Option<f64>,
    pub average: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureSummary {
    /// Whether the aggregate covered at least one row
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.average.is_none() && self.max.is_none()
    }
}

/// Row counts and date bounds of the loaded database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub station_count: usize,
    pub measurement_count: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}
