use std::error::Error;
use std::path::PathBuf;

use kona::{ClimateStore, SqliteStore};

fn main() -> Result<(), Box<dyn Error>> {
    // Path to the database, defaulting to the one the server uses
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("hawaii.sqlite"));

    println!("Inspecting climate database: {}", path.display());

    let store = SqliteStore::open(&path)?;

    if let Err(e) = store.check_schema() {
        println!("\nSchema check failed: {}", e);
        return Err(e.into());
    }

    let summary = store.summary()?;

    println!("\n=== DATASET ===");
    println!("  Stations:     {}", summary.station_count);
    println!("  Measurements: {}", summary.measurement_count);
    println!(
        "  Date range:   {} to {}",
        summary.first_date.as_deref().unwrap_or("-"),
        summary.last_date.as_deref().unwrap_or("-")
    );

    println!("\nStations:");
    for station in store.station_details()? {
        print!("  {}", station.station);
        if let Some(name) = &station.name {
            print!(" {}", name);
        }
        match (station.latitude, station.longitude, station.elevation) {
            (Some(lat), Some(lon), Some(elev)) => println!(" ({:.4}, {:.4}, {} m)", lat, lon, elev),
            (Some(lat), Some(lon), None) => println!(" ({:.4}, {:.4})", lat, lon),
            _ => println!(),
        }
    }

    println!("\nSample Measurements:");
    for m in store.sample_measurements(5)? {
        println!(
            "  {} {} prcp={} tobs={}",
            m.station,
            m.date,
            m.prcp.map_or("null".to_string(), |v| v.to_string()),
            m.tobs.map_or("null".to_string(), |v| v.to_string()),
        );
    }

    Ok(())
}
