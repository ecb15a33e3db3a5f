#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Per-district aggregation of geocoded infringement records.
//!
//! [`aggregate`] runs the full stage:
//!
//! 1. [`group_records`] sums counts per `(district, latitude, longitude)`
//!    and orders the groups by count, highest first.
//! 2. [`drop_unlocated`] discards groups without coordinates.
//! 3. [`intensity::normalize_intensity`] rescales the surviving counts onto
//!    `0..=100`.
//!
//! Unlocated groups are removed before normalization so that districts
//! which never reach the map cannot skew the intensity scale.

pub mod intensity;

use std::cmp::Reverse;
use std::collections::BTreeMap;

use infringement_map_infringement_models::{
    AggregatedLocation, Coordinates, GeocodedRecord, LocationGroup,
};

pub use intensity::normalize_intensity;

/// Groups records by district and coordinates and sums their counts.
///
/// Records without coordinates still form their own group. The result is
/// sorted by count descending; equal counts keep ascending district order.
#[must_use]
pub fn group_records(records: &[GeocodedRecord]) -> Vec<LocationGroup> {
    let mut groups: BTreeMap<(&str, Option<[u64; 2]>), (Option<Coordinates>, u64)> =
        BTreeMap::new();

    for geocoded in records {
        let key = (
            geocoded.record.district.as_str(),
            geocoded.coordinates.map(Coordinates::key),
        );
        let entry = groups.entry(key).or_insert((geocoded.coordinates, 0));
        entry.1 = entry.1.saturating_add(geocoded.record.count);
    }

    let mut groups: Vec<LocationGroup> = groups
        .into_iter()
        .map(|((district, _), (coordinates, count))| LocationGroup {
            district: district.to_owned(),
            coordinates,
            count,
        })
        .collect();

    groups.sort_by_key(|g| Reverse(g.count));
    groups
}

/// Drops groups without coordinates, keeping the order of the rest.
///
/// Intensities are left at `0.0` until [`normalize_intensity`] runs.
#[must_use]
pub fn drop_unlocated(groups: Vec<LocationGroup>) -> Vec<AggregatedLocation> {
    let before = groups.len();

    let located: Vec<AggregatedLocation> = groups
        .into_iter()
        .filter_map(|group| {
            let coordinates = group.coordinates?;
            Some(AggregatedLocation {
                district: group.district,
                coordinates,
                count: group.count,
                intensity: 0.0,
            })
        })
        .collect();

    let dropped = before - located.len();
    if dropped > 0 {
        log::debug!("Dropped {dropped} location groups without coordinates");
    }

    located
}

/// Groups, filters, and normalizes geocoded records into map-ready
/// locations, ordered by count descending.
#[must_use]
pub fn aggregate(records: &[GeocodedRecord]) -> Vec<AggregatedLocation> {
    let groups = group_records(records);
    let mut locations = drop_unlocated(groups);
    normalize_intensity(&mut locations);

    log::info!("Aggregated records into {} locations", locations.len());
    locations
}
