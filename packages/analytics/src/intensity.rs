//! Min-max normalization of location counts onto a 0-100 intensity scale.

use infringement_map_infringement_models::AggregatedLocation;

/// Intensity assigned to the location(s) with the highest count.
pub const MAX_INTENSITY: f64 = 100.0;

/// Intensity assigned to every location when all counts are equal.
///
/// With a zero-width range there is no meaningful min or max, so every
/// location is treated as the hottest spot instead of producing NaN.
pub const FLAT_RANGE_INTENSITY: f64 = MAX_INTENSITY;

/// Rescales each location's count so that the smallest count maps to `0.0`
/// and the largest to [`MAX_INTENSITY`].
///
/// When every count is identical (including a single location) all
/// intensities are set to [`FLAT_RANGE_INTENSITY`].
#[allow(clippy::cast_precision_loss)]
pub fn normalize_intensity(locations: &mut [AggregatedLocation]) {
    let Some(min) = locations.iter().map(|l| l.count).min() else {
        return;
    };
    let max = locations.iter().map(|l| l.count).max().unwrap_or(min);
    let range = max - min;

    if range == 0 {
        log::warn!(
            "All {} locations share the count {min}; using intensity {FLAT_RANGE_INTENSITY}",
            locations.len()
        );
        for location in locations.iter_mut() {
            location.intensity = FLAT_RANGE_INTENSITY;
        }
        return;
    }

    for location in locations.iter_mut() {
        location.intensity = MAX_INTENSITY * (location.count - min) as f64 / range as f64;
    }
}

#[cfg(test)]
mod tests {
    use infringement_map_infringement_models::Coordinates;

    use super::*;

    fn location(district: &str, count: u64) -> AggregatedLocation {
        AggregatedLocation {
            district: district.to_string(),
            coordinates: Coordinates::new(-27.0, 153.0),
            count,
            intensity: -1.0,
        }
    }

    #[test]
    fn maps_min_to_zero_and_max_to_hundred() {
        let mut locations = vec![location("A", 300), location("B", 200), location("C", 100)];
        normalize_intensity(&mut locations);

        assert!((locations[0].intensity - 100.0).abs() < f64::EPSILON);
        assert!((locations[1].intensity - 50.0).abs() < f64::EPSILON);
        assert!(locations[2].intensity.abs() < f64::EPSILON);
    }

    #[test]
    fn intensities_stay_in_range() {
        let mut locations = vec![
            location("A", 17),
            location("B", 4),
            location("C", 1_000_000),
            location("D", 0),
            location("E", 999),
        ];
        normalize_intensity(&mut locations);

        for l in &locations {
            assert!((0.0..=100.0).contains(&l.intensity), "{} = {}", l.district, l.intensity);
        }
    }

    #[test]
    fn single_location_gets_flat_range_intensity() {
        let mut locations = vec![location("BRISBANE", 150)];
        normalize_intensity(&mut locations);
        assert!((locations[0].intensity - FLAT_RANGE_INTENSITY).abs() < f64::EPSILON);
    }

    #[test]
    fn equal_counts_never_produce_nan() {
        let mut locations = vec![location("A", 5), location("B", 5), location("C", 5)];
        normalize_intensity(&mut locations);

        for l in &locations {
            assert!(!l.intensity.is_nan());
            assert!((l.intensity - FLAT_RANGE_INTENSITY).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn empty_slice_is_a_no_op() {
        let mut locations: Vec<AggregatedLocation> = Vec::new();
        normalize_intensity(&mut locations);
        assert!(locations.is_empty());
    }
}
