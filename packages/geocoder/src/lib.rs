#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geocoding for traffic infringement records.
//!
//! Districts are resolved against the static [`GeocodeTable`] rather than a
//! remote service. Records whose district is missing from the table keep
//! `None` coordinates; they are not an error and are dropped later during
//! aggregation.

pub mod table;

use std::collections::BTreeSet;

use infringement_map_infringement_models::{GeocodedRecord, InputRecord};

pub use table::{GeocodeTable, QUEENSLAND_DISTRICTS};

/// Match statistics for one geocoding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeocodeSummary {
    /// Number of input records.
    pub total: usize,
    /// Number of records that received coordinates.
    pub geocoded: usize,
}

impl GeocodeSummary {
    #[must_use]
    pub const fn unmatched(&self) -> usize {
        self.total - self.geocoded
    }
}

/// Attaches coordinates to every record by looking its district up in
/// `table`.
///
/// Record order is preserved.
#[must_use]
pub fn geocode_records(
    table: &GeocodeTable,
    records: Vec<InputRecord>,
) -> (Vec<GeocodedRecord>, GeocodeSummary) {
    let total = records.len();
    let mut unmatched_districts = BTreeSet::new();

    let geocoded: Vec<GeocodedRecord> = records
        .into_iter()
        .map(|record| {
            let coordinates = table.lookup(&record.district);
            if coordinates.is_none() {
                unmatched_districts.insert(record.district.clone());
            }
            GeocodedRecord {
                record,
                coordinates,
            }
        })
        .collect();

    let summary = GeocodeSummary {
        total,
        geocoded: geocoded.iter().filter(|r| r.is_geocoded()).count(),
    };

    log::info!(
        "Geocoded {} out of {} records",
        summary.geocoded,
        summary.total
    );
    for district in &unmatched_districts {
        log::debug!("No coordinates for district '{district}'");
    }

    (geocoded, summary)
}
