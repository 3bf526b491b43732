//! SQLite-backed [`ClimateStore`].
//!
//! Every query opens its own read-only connection and drops it before
//! returning, whether the query succeeded or not. There is no pooling and no
//! transaction; each endpoint runs a single statement.

use rusqlite::{params, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::trace;

use super::{ClimateStore, ObservationColumn};
use crate::error::{KonaError, Result};
use crate::logging::log_timed_operation;
use crate::models::{DatasetSummary, PrecipitationRecord, TemperatureSummary, TobsRecord};
use crate::schema::{required_tables, Measurement, Station, MEASUREMENT_TABLE, STATION_TABLE};

/// Climate store reading from a SQLite database file
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Create a store for the database at `path`.
    ///
    /// The file is not opened until the first query.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store, failing early if the database file does not exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(KonaError::DataNotFound {
                message: format!("Database file not found: {}", path.display()),
            });
        }
        Ok(Self::new(path))
    }

    /// Path of the underlying database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `query` on a fresh read-only session.
    ///
    /// The connection lives only inside this call and is closed when it is
    /// dropped, on the error path as well as the success path.
    fn with_session<T, F>(&self, operation: &str, query: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        log_timed_operation(operation, || -> Result<T> {
            let session = Connection::open_with_flags(
                &self.path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?;
            trace!(operation = operation, path = %self.path.display(), "Session opened");
            let result = query(&session);
            drop(session);
            trace!(operation = operation, "Session closed");
            Ok(result?)
        })
    }

    /// Full station rows, ordered by station code
    pub fn station_details(&self) -> Result<Vec<Station>> {
        self.with_session("station_details", |conn| {
            let sql = format!(
                "SELECT id, station, name, latitude, longitude, elevation FROM {} ORDER BY station",
                STATION_TABLE
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], Station::from_row)?;
            rows.collect()
        })
    }

    /// The first `limit` measurement rows in storage order
    pub fn sample_measurements(&self, limit: usize) -> Result<Vec<Measurement>> {
        self.with_session("sample_measurements", |conn| {
            let sql = format!(
                "SELECT id, station, date, prcp, tobs FROM {} LIMIT ?1",
                MEASUREMENT_TABLE
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![limit as i64], Measurement::from_row)?;
            rows.collect()
        })
    }

    /// Column names of `table`, empty if the table does not exist
    fn table_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<String>> {
        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
        let rows = stmt.query_map(params![table], |row| row.get::<_, String>(0))?;
        rows.collect()
    }
}

impl ClimateStore for SqliteStore {
    fn precipitation(&self) -> Result<Vec<PrecipitationRecord>> {
        self.with_session("precipitation_query", |conn| {
            let sql = format!("SELECT date, prcp FROM {}", MEASUREMENT_TABLE);
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], |row| {
                Ok(PrecipitationRecord {
                    date: row.get(0)?,
                    precipitation: row.get(1)?,
                })
            })?;
            rows.collect()
        })
    }

    fn stations(&self) -> Result<Vec<String>> {
        self.with_session("stations_query", |conn| {
            let sql = format!(
                "SELECT DISTINCT station FROM {} ORDER BY station ASC",
                STATION_TABLE
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
            rows.collect()
        })
    }

    fn latest_date(&self) -> Result<Option<String>> {
        self.with_session("latest_date_query", |conn| {
            let sql = format!("SELECT MAX(date) FROM {}", MEASUREMENT_TABLE);
            conn.query_row(&sql, [], |row| row.get::<_, Option<String>>(0))
        })
    }

    fn observations_since(
        &self,
        cutoff: &str,
        column: ObservationColumn,
    ) -> Result<Vec<TobsRecord>> {
        self.with_session("observations_since_query", |conn| {
            let sql = format!(
                "SELECT date, {} FROM {} WHERE date >= ?1",
                column.column_name(),
                MEASUREMENT_TABLE
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![cutoff], |row| {
                Ok(TobsRecord {
                    date: row.get(0)?,
                    tobs: row.get(1)?,
                })
            })?;
            rows.collect()
        })
    }

    fn temperature_summary(&self, start: &str, stop: Option<&str>) -> Result<TemperatureSummary> {
        self.with_session("temperature_summary_query", |conn| {
            let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<TemperatureSummary> {
                Ok(TemperatureSummary {
                    min: row.get(0)?,
                    average: row.get(1)?,
                    max: row.get(2)?,
                })
            };

            match stop {
                Some(stop) => {
                    let sql = format!(
                        "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM {} WHERE date >= ?1 AND date <= ?2",
                        MEASUREMENT_TABLE
                    );
                    conn.query_row(&sql, params![start, stop], map_row)
                }
                None => {
                    let sql = format!(
                        "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM {} WHERE date >= ?1",
                        MEASUREMENT_TABLE
                    );
                    conn.query_row(&sql, params![start], map_row)
                }
            }
        })
    }

    fn summary(&self) -> Result<DatasetSummary> {
        self.with_session("dataset_summary", |conn| {
            let station_count: i64 = conn.query_row(
                &format!("SELECT COUNT(DISTINCT station) FROM {}", STATION_TABLE),
                [],
                |row| row.get(0),
            )?;
            let (measurement_count, first_date, last_date) = conn.query_row(
                &format!(
                    "SELECT COUNT(*), MIN(date), MAX(date) FROM {}",
                    MEASUREMENT_TABLE
                ),
                [],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, Option<String>>(2)?,
                    ))
                },
            )?;

            Ok(DatasetSummary {
                station_count: station_count as usize,
                measurement_count: measurement_count as usize,
                first_date,
                last_date,
            })
        })
    }

    fn check_schema(&self) -> Result<()> {
        let tables = self.with_session("schema_check", |conn| {
            let mut tables = Vec::new();
            for (table, _) in required_tables() {
                tables.push((table, Self::table_columns(conn, table)?));
            }
            Ok(tables)
        })?;

        for ((table, columns), (_, required)) in tables.iter().zip(required_tables()) {
            if columns.is_empty() {
                return Err(KonaError::DataNotFound {
                    message: format!("Table '{}' not found in {}", table, self.path.display()),
                });
            }
            if let Some(missing) = required
                .iter()
                .find(|c| !columns.iter().any(|have| have.as_str() == **c))
            {
                return Err(KonaError::InvalidData {
                    message: format!("Table '{}' has no '{}' column", table, missing),
                });
            }
        }

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
