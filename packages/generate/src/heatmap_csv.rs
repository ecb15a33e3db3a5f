//! Flat `latitude,longitude,intensity` CSV used by the web client's heatmap
//! layer.

use std::io::{Read, Write};

use infringement_map_infringement_models::AggregatedLocation;
use serde::{Deserialize, Serialize};

/// Column names, in output order.
pub const HEADER: [&str; 3] = ["latitude", "longitude", "intensity"];

/// One CSV row. Field order is the column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub intensity: f64,
}

impl From<&AggregatedLocation> for HeatmapPoint {
    fn from(location: &AggregatedLocation) -> Self {
        Self {
            latitude: location.coordinates.latitude,
            longitude: location.coordinates.longitude,
            intensity: location.intensity,
        }
    }
}

/// Writes a header row followed by one row per location, in input order.
///
/// The header is written even when `locations` is empty.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write_points<W: Write>(
    writer: W,
    locations: &[AggregatedLocation],
) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(HEADER)?;
    for location in locations {
        writer.serialize(HeatmapPoint::from(location))?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads heatmap points back from CSV data with a
/// `latitude,longitude,intensity` header.
///
/// # Errors
///
/// Returns an error if the data is not valid CSV or a value is not a number.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<HeatmapPoint>, csv::Error> {
    csv::Reader::from_reader(reader).deserialize().collect()
}
