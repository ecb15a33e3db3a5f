//! Canonical input and output locations.
//!
//! Defaults are relative to the workspace root so the tool behaves the same
//! regardless of the caller's working directory.

use std::path::{Path, PathBuf};

/// File name of the `GeoJSON` output.
pub const GEOJSON_FILE_NAME: &str = "infringements.json";

/// File name of the CSV output.
pub const CSV_FILE_NAME: &str = "infringements.csv";

/// File name of the `GeoJSON` copy in the client data directory.
pub const CLIENT_GEOJSON_FILE_NAME: &str = "data.json";

/// File name of the CSV copy in the client data directory.
pub const CLIENT_CSV_FILE_NAME: &str = "data.csv";

/// Returns the workspace root directory.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR`.
///
/// # Panics
///
/// Panics if the project root cannot be resolved.
#[must_use]
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("Failed to find project root from CARGO_MANIFEST_DIR")
        .to_path_buf()
}

/// Returns the `data/` directory path.
#[must_use]
pub fn data_dir() -> PathBuf {
    project_root().join("data")
}

/// Default source table: `data/trafficinfringementsissued.csv`.
#[must_use]
pub fn default_input_path() -> PathBuf {
    data_dir().join("trafficinfringementsissued.csv")
}

/// Default output directory: `data/output/`.
#[must_use]
pub fn default_output_dir() -> PathBuf {
    data_dir().join("output")
}

/// The web client's data directory: `client/data/`.
#[must_use]
pub fn client_data_dir() -> PathBuf {
    project_root().join("client").join("data")
}
