//! Test data generation utilities.
//!
//! Builds small SQLite databases shaped like the production climate database.
//! kona itself never creates tables, so the DDL lives here.

use kona::schema::{Measurement, Station};
use rusqlite::{params, Connection, Result};
use std::path::Path;

/// DDL matching the production `station` and `measurement` tables
pub const SCHEMA_SQL: &str = r#"
    CREATE TABLE station (
        id INTEGER NOT NULL PRIMARY KEY,
        station VARCHAR(255),
        name VARCHAR(255),
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    );
    CREATE TABLE measurement (
        id INTEGER NOT NULL PRIMARY KEY,
        station VARCHAR(255),
        date VARCHAR(255),
        prcp FLOAT,
        tobs FLOAT
    );
"#;

/// Most recent measurement date in [`hawaii_measurements`]
pub const LATEST_DATE: &str = "2017-08-23";

/// Station rows, including a duplicated code
pub fn hawaii_stations() -> Vec<Station> {
    let rows = [
        ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
        ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
        ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
        ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (code, name, lat, lon, elev))| Station {
            id: i as i64 + 1,
            station: code.to_string(),
            name: Some(name.to_string()),
            latitude: Some(*lat),
            longitude: Some(*lon),
            elevation: Some(*elev),
        })
        .collect()
}

/// Measurement rows spanning a little more than a year, with one missing precipitation
pub fn hawaii_measurements() -> Vec<Measurement> {
    let rows = [
        ("USC00519397", "2016-01-01", Some(0.0), 66.0),
        ("USC00519397", "2016-08-22", Some(0.4), 76.0),
        ("USC00519281", "2016-08-23", Some(1.79), 77.0),
        ("USC00513117", "2016-12-25", Some(0.06), 70.0),
        ("USC00519281", "2017-01-01", Some(0.5), 62.0),
        ("USC00519397", "2017-06-01", None, 79.0),
        ("USC00513117", "2017-08-22", Some(0.0), 82.0),
        ("USC00519397", "2017-08-23", Some(0.08), 81.0),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (station, date, prcp, tobs))| Measurement {
            id: i as i64 + 1,
            station: station.to_string(),
            date: date.to_string(),
            prcp: *prcp,
            tobs: Some(*tobs),
        })
        .collect()
}

/// Create a database file at `path` with the given rows
pub fn create_climate_db(
    path: &Path,
    stations: &[Station],
    measurements: &[Measurement],
) -> Result<()> {
    let mut conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA_SQL)?;

    let tx = conn.transaction()?;
    for s in stations {
        tx.execute(
            "INSERT INTO station (id, station, name, latitude, longitude, elevation) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![s.id, s.station, s.name, s.latitude, s.longitude, s.elevation],
        )?;
    }
    for m in measurements {
        tx.execute(
            "INSERT INTO measurement (id, station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![m.id, m.station, m.date, m.prcp, m.tobs],
        )?;
    }
    tx.commit()
}

/// Create the standard fixture database
pub fn create_hawaii_db(path: &Path) -> Result<()> {
    create_climate_db(path, &hawaii_stations(), &hawaii_measurements())
}
