//! Heatmap `GeoJSON` feature collection model.
//!
//! The structs mirror the exact layout the web client consumes. Field order
//! in each struct is the field order in the serialized output, so the same
//! input always produces the same bytes.

use infringement_map_infringement_models::AggregatedLocation;
use serde::{Deserialize, Serialize};

/// The `type` tag of a feature collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionType {
    FeatureCollection,
}

/// The `type` tag of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    Feature,
}

/// The `type` tag of a point geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
}

/// A `FeatureCollection` of heatmap points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCollection {
    #[serde(rename = "type")]
    pub kind: CollectionType,
    pub features: Vec<HeatmapFeature>,
}

/// One heatmap point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapFeature {
    #[serde(rename = "type")]
    pub kind: FeatureType,
    pub properties: HeatmapProperties,
    pub geometry: PointGeometry,
}

/// Properties attached to each heatmap point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapProperties {
    /// Normalized weight on `0.0..=100.0`.
    pub intensity: f64,
    /// District name.
    pub location: String,
    /// Raw infringement count.
    pub count: u64,
}

/// A `Point` geometry in `[longitude, latitude]` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: GeometryType,
    pub coordinates: [f64; 2],
}

impl From<&AggregatedLocation> for HeatmapFeature {
    fn from(location: &AggregatedLocation) -> Self {
        Self {
            kind: FeatureType::Feature,
            properties: HeatmapProperties {
                intensity: location.intensity,
                location: location.district.clone(),
                count: location.count,
            },
            geometry: PointGeometry {
                kind: GeometryType::Point,
                coordinates: location.coordinates.lon_lat(),
            },
        }
    }
}

/// Builds one feature per location, keeping the input order.
#[must_use]
pub fn build_feature_collection(locations: &[AggregatedLocation]) -> HeatmapCollection {
    HeatmapCollection {
        kind: CollectionType::FeatureCollection,
        features: locations.iter().map(HeatmapFeature::from).collect(),
    }
}

/// Serializes a collection with 2-space indentation.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_pretty_json(collection: &HeatmapCollection) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(collection)
}

/// Parses a document previously produced by [`to_pretty_json`].
///
/// # Errors
///
/// Returns an error if `json` is not a heatmap feature collection.
pub fn parse_feature_collection(json: &str) -> Result<HeatmapCollection, serde_json::Error> {
    serde_json::from_str(json)
}
