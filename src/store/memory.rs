//! In-memory [`ClimateStore`] used by handler tests.

use std::sync::atomic::{AtomicBool, Ordering};

use super::{ClimateStore, ObservationColumn};
use crate::error::{KonaError, Result};
use crate::models::{DatasetSummary, PrecipitationRecord, TemperatureSummary, TobsRecord};
use crate::schema::{Measurement, Station};

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub stations: Vec<Station>,
    pub measurements: Vec<Measurement>,
    /// When set, every query fails as if the database were unreachable
    pub unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new(stations: &[&str], measurements: &[(&str, Option<f64>, Option<f64>)]) -> Self {
        Self {
            stations: stations
                .iter()
                .enumerate()
                .map(|(i, code)| Station {
                    id: i as i64 + 1,
                    station: code.to_string(),
                    name: None,
                    latitude: None,
                    longitude: None,
                    elevation: None,
                })
                .collect(),
            measurements: measurements
                .iter()
                .enumerate()
                .map(|(i, (date, prcp, tobs))| Measurement {
                    id: i as i64 + 1,
                    station: "USC001".to_string(),
                    date: date.to_string(),
                    prcp: *prcp,
                    tobs: *tobs,
                })
                .collect(),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn set_unavailable(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(KonaError::Database(rusqlite::Error::InvalidPath(
                "memory store unavailable".into(),
            )));
        }
        Ok(())
    }
}

impl ClimateStore for MemoryStore {
    fn precipitation(&self) -> Result<Vec<PrecipitationRecord>> {
        self.check_available()?;
        Ok(self
            .measurements
            .iter()
            .map(|m| PrecipitationRecord {
                date: m.date.clone(),
                precipitation: m.prcp,
            })
            .collect())
    }

    fn stations(&self) -> Result<Vec<String>> {
        self.check_available()?;
        let mut codes: Vec<String> = self.stations.iter().map(|s| s.station.clone()).collect();
        codes.sort();
        codes.dedup();
        Ok(codes)
    }

    fn latest_date(&self) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.measurements.iter().map(|m| m.date.clone()).max())
    }

    fn observations_since(
        &self,
        cutoff: &str,
        column: ObservationColumn,
    ) -> Result<Vec<TobsRecord>> {
        self.check_available()?;
        Ok(self
            .measurements
            .iter()
            .filter(|m| m.date.as_str() >= cutoff)
            .map(|m| TobsRecord {
                date: m.date.clone(),
                tobs: match column {
                    ObservationColumn::Precipitation => m.prcp,
                    ObservationColumn::Temperature => m.tobs,
                },
            })
            .collect())
    }

    fn temperature_summary(&self, start: &str, stop: Option<&str>) -> Result<TemperatureSummary> {
        self.check_available()?;
        let values: Vec<f64> = self
            .measurements
            .iter()
            .filter(|m| m.date.as_str() >= start && stop.map_or(true, |s| m.date.as_str() <= s))
            .filter_map(|m| m.tobs)
            .collect();

        if values.is_empty() {
            return Ok(TemperatureSummary::default());
        }

        Ok(TemperatureSummary {
            min: values.iter().copied().reduce(f64::min),
            average: Some(values.iter().sum::<f64>() / values.len() as f64),
            max: values.iter().copied().reduce(f64::max),
        })
    }

    fn summary(&self) -> Result<DatasetSummary> {
        self.check_available()?;
        Ok(DatasetSummary {
            station_count: self.stations()?.len(),
            measurement_count: self.measurements.len(),
            first_date: self.measurements.iter().map(|m| m.date.clone()).min(),
            last_date: self.latest_date()?,
        })
    }

    fn check_schema(&self) -> Result<()> {
        self.check_available()
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
