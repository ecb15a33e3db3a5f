#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Loader for traffic infringement CSV files.
//!
//! Reads a header-row CSV into memory, normalizes the column names (see
//! [`columns::normalize_column_name`]), and turns every row into an
//! [`InputRecord`]. The `district` and `count` columns are required; all
//! other columns are carried through untouched.

pub mod columns;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use infringement_map_infringement_models::{COUNT_COLUMN, DISTRICT_COLUMN, InputRecord};

pub use columns::normalize_column_name;

/// Errors that can occur while loading the source table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV content is malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent after header normalization.
    #[error("Missing required column '{column}'")]
    MissingColumn {
        /// Normalized name of the missing column.
        column: &'static str,
    },

    /// A `count` cell is not a non-negative integer.
    #[error("Invalid count '{value}' on line {line}")]
    InvalidCount {
        /// 1-based line number in the source file.
        line: u64,
        /// The raw cell contents.
        value: String,
    },
}

/// Loads every record from the CSV file at `path`.
///
/// # Errors
///
/// * [`LoadError::Io`] if the file does not exist or cannot be read
/// * [`LoadError::Csv`] if the content is not valid CSV
/// * [`LoadError::MissingColumn`] if `district` or `count` is absent
/// * [`LoadError::InvalidCount`] if a count cell cannot be parsed
pub fn load_records(path: &Path) -> Result<Vec<InputRecord>, LoadError> {
    log::info!("Processing {}...", path.display());

    let file = File::open(path)?;
    let records = load_records_from_reader(file)?;

    log::info!("Loaded {} records", records.len());
    Ok(records)
}

/// Loads every record from CSV data read from `reader`.
///
/// # Errors
///
/// Same as [`load_records`], minus the file-open failure.
pub fn load_records_from_reader<R: Read>(reader: R) -> Result<Vec<InputRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_column_name)
        .collect();
    log::debug!("Normalized columns: {headers:?}");

    let district_idx = column_index(&headers, DISTRICT_COLUMN)?;
    let count_idx = column_index(&headers, COUNT_COLUMN)?;

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;
        let line = row.position().map_or(0, csv::Position::line);

        let district = row.get(district_idx).unwrap_or_default().to_owned();
        let raw_count = row.get(count_idx).unwrap_or_default();
        let count = columns::parse_count(raw_count).ok_or_else(|| LoadError::InvalidCount {
            line,
            value: raw_count.to_owned(),
        })?;

        let columns: BTreeMap<String, String> = headers
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != district_idx && i != count_idx)
            .map(|(i, header)| (header.clone(), row.get(i).unwrap_or_default().to_owned()))
            .collect();

        records.push(InputRecord {
            district,
            count,
            columns,
        });
    }

    Ok(records)
}

/// Index of the first header equal to `column`.
fn column_index(headers: &[String], column: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(LoadError::MissingColumn { column })
}
