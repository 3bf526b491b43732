//! Static description of the climate database tables.
//!
//! The database is populated outside of kona. These definitions declare the
//! shape kona expects so queries can be written against fixed column names
//! and the schema can be checked once at startup.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Name of the station table
pub const STATION_TABLE: &str = "station";

/// Name of the measurement table
pub const MEASUREMENT_TABLE: &str = "measurement";

/// A weather-observation site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    /// Station code, e.g. `USC00519397`
    pub station: String,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

impl Station {
    /// Columns the service relies on
    pub const REQUIRED_COLUMNS: &'static [&'static str] = &["station"];

    /// Build a station from a `SELECT id, station, name, latitude, longitude, elevation` row
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            station: row.get(1)?,
            name: row.get(2)?,
            latitude: row.get(3)?,
            longitude: row.get(4)?,
            elevation: row.get(5)?,
        })
    }
}

/// One daily reading at a station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: i64,
    /// Station code this reading belongs to
    pub station: String,
    /// Zero-padded ISO date (`YYYY-MM-DD`), so string order is date order
    pub date: String,
    /// Precipitation, absent on days without a reading
    pub prcp: Option<f64>,
    /// Temperature observation
    pub tobs: Option<f64>,
}

impl Measurement {
    /// Columns the service relies on
    pub const REQUIRED_COLUMNS: &'static [&'static str] = &["station", "date", "prcp", "tobs"];

    /// Build a measurement from a `SELECT id, station, date, prcp, tobs` row
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            station: row.get(1)?,
            date: row.get(2)?,
            prcp: row.get(3)?,
            tobs: row.get(4)?,
        })
    }
}

/// Tables and the columns each must provide
pub fn required_tables() -> [(&'static str, &'static [&'static str]); 2] {
    [
        (STATION_TABLE, Station::REQUIRED_COLUMNS),
        (MEASUREMENT_TABLE, Measurement::REQUIRED_COLUMNS),
    ]
}
