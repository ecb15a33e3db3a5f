#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared types for the traffic infringement heatmap pipeline.
//!
//! Records flow through the pipeline in three shapes:
//!
//! 1. [`InputRecord`]: one row of the source CSV after column cleanup.
//! 2. [`GeocodedRecord`]: the same row paired with the coordinates of its
//!    district, if the district is known.
//! 3. [`LocationGroup`] / [`AggregatedLocation`]: per-district sums, before
//!    and after intensity normalization.

use std::collections::BTreeMap;

/// Name of the district column after header normalization.
pub const DISTRICT_COLUMN: &str = "district";

/// Name of the count column after header normalization.
pub const COUNT_COLUMN: &str = "count";

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a new coordinate pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the pair in `GeoJSON` axis order: `[longitude, latitude]`.
    #[must_use]
    pub const fn lon_lat(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Bit-exact key for grouping. Two coordinates produce the same key only
    /// if both components are bitwise identical.
    #[must_use]
    pub const fn key(self) -> [u64; 2] {
        [self.latitude.to_bits(), self.longitude.to_bits()]
    }
}

/// One row of the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    /// District or region name, exactly as it appears in the source.
    pub district: String,
    /// Number of infringements recorded in this row.
    pub count: u64,
    /// Every other column, keyed by its normalized name.
    pub columns: BTreeMap<String, String>,
}

impl InputRecord {
    /// Creates a record with no extra columns.
    #[must_use]
    pub fn new(district: impl Into<String>, count: u64) -> Self {
        Self {
            district: district.into(),
            count,
            columns: BTreeMap::new(),
        }
    }
}

/// An [`InputRecord`] after the geocoding lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedRecord {
    pub record: InputRecord,
    /// `None` when the district is not in the geocode table.
    pub coordinates: Option<Coordinates>,
}

impl GeocodedRecord {
    #[must_use]
    pub const fn is_geocoded(&self) -> bool {
        self.coordinates.is_some()
    }
}

/// Summed counts for one `(district, latitude, longitude)` group, before
/// unlocated groups are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationGroup {
    pub district: String,
    pub coordinates: Option<Coordinates>,
    pub count: u64,
}

/// A located, normalized group ready to be emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedLocation {
    /// District name used as the feature's `location` property.
    pub district: String,
    pub coordinates: Coordinates,
    /// Sum of all input counts for this district.
    pub count: u64,
    /// Count rescaled onto `0.0..=100.0`.
    pub intensity: f64,
}
