use std::io;

use serde::Serialize;

use crate::{propagator::SatLocation, satloc_errors::SatlocError};

const CSV_HEADER: [&str; 8] = [
    "name",
    "x",
    "y",
    "z",
    "latitude",
    "longitude",
    "altitude",
    "velocity",
];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    x: f64,
    y: f64,
    z: f64,
    latitude: f64,
    longitude: f64,
    altitude: f64,
    velocity: Option<f64>,
}

impl<'a> CsvRow<'a> {
    fn new(name: &'a str, location: &SatLocation) -> Self {
        CsvRow {
            name,
            x: location.x,
            y: location.y,
            z: location.z,
            latitude: location.latitude,
            longitude: location.longitude,
            altitude: location.altitude,
            velocity: location.velocity,
        }
    }
}

/// Write located satellites as CSV, header first then one row per satellite.
///
/// Columns are `name,x,y,z,latitude,longitude,altitude,velocity` in km, degrees and km/s.
/// A missing velocity leaves its field empty. An empty report still carries the header.
pub fn write_csv<W, S>(writer: W, rows: &[(S, SatLocation)]) -> Result<(), SatlocError>
where
    W: io::Write,
    S: AsRef<str>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        wtr.write_record(CSV_HEADER)?;
    }
    for (name, location) in rows {
        wtr.serialize(CsvRow::new(name.as_ref(), location))?;
    }
    wtr.flush()?;
    Ok(())
}
