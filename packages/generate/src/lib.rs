#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Output generation for the infringement heatmap.
//!
//! Writes the aggregated locations as a `GeoJSON` `FeatureCollection`
//! (`infringements.json`) and a flat heatmap CSV (`infringements.csv`), then
//! optionally copies both into the web client's data directory as
//! `data.json` and `data.csv`.
//!
//! Both outputs are fully rewritten on every run.

pub mod feature_collection;
pub mod heatmap_csv;
pub mod paths;

use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use infringement_map_infringement_models::AggregatedLocation;

pub use feature_collection::{HeatmapCollection, build_feature_collection};
pub use heatmap_csv::HeatmapPoint;

/// Errors that can occur while writing outputs.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// A file or directory operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `GeoJSON` serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Paths of a written `GeoJSON`/CSV pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFiles {
    pub geojson: PathBuf,
    pub csv: PathBuf,
}

/// Writes `collection` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_geojson(path: &Path, collection: &HeatmapCollection) -> Result<(), EmitError> {
    let json = feature_collection::to_pretty_json(collection)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Writes the `latitude,longitude,intensity` CSV for `locations` to `path`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_csv(path: &Path, locations: &[AggregatedLocation]) -> Result<(), EmitError> {
    let writer = BufWriter::new(File::create(path)?);
    heatmap_csv::write_points(writer, locations)?;
    Ok(())
}

/// Writes both outputs into `output_dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or either file cannot
/// be written.
pub fn emit(
    output_dir: &Path,
    locations: &[AggregatedLocation],
) -> Result<EmittedFiles, EmitError> {
    std::fs::create_dir_all(output_dir)?;

    let files = EmittedFiles {
        geojson: output_dir.join(paths::GEOJSON_FILE_NAME),
        csv: output_dir.join(paths::CSV_FILE_NAME),
    };

    write_geojson(&files.geojson, &build_feature_collection(locations))?;
    log::info!("GeoJSON saved to {}", files.geojson.display());

    write_csv(&files.csv, locations)?;
    log::info!("CSV saved to {}", files.csv.display());

    Ok(files)
}

/// Copies an emitted pair into `client_dir` as `data.json` and `data.csv`,
/// replacing any existing copies.
///
/// # Errors
///
/// Returns an error if `client_dir` cannot be created or a copy fails.
pub fn copy_to_client(
    files: &EmittedFiles,
    client_dir: &Path,
) -> Result<EmittedFiles, EmitError> {
    std::fs::create_dir_all(client_dir)?;

    let copies = EmittedFiles {
        geojson: client_dir.join(paths::CLIENT_GEOJSON_FILE_NAME),
        csv: client_dir.join(paths::CLIENT_CSV_FILE_NAME),
    };

    std::fs::copy(&files.geojson, &copies.geojson)?;
    std::fs::copy(&files.csv, &copies.csv)?;
    log::info!("Files copied to web app directory: {}", client_dir.display());

    Ok(copies)
}
