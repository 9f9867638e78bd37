//! Great-circle distance estimation between stations.

use crate::domain::{Coordinate, CoordinatePair};

/// Approximate Earth radius used for all distance estimates.
pub const EARTH_RADIUS_KM: f64 = 6373.0;

/// Haversine distance between two coordinates, in kilometres.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let d_lat = lat2 - lat1;
    let d_lng = (to.lng() - from.lng()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `a` fractionally past 1 for antipodal points.
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Mean distance over every sample with both coordinates present.
///
/// Samples with a missing coordinate are excluded, not counted as zero.
/// Returns `None` when no sample is usable.
pub fn estimate_distance(pairs: &[CoordinatePair]) -> Option<f64> {
    let (sum, count) = pairs
        .iter()
        .filter_map(CoordinatePair::both)
        .map(|(from, to)| haversine_km(from, to))
        .fold((0.0, 0usize), |(sum, count), km| (sum + km, count + 1));

    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn pair(a: Coordinate, b: Coordinate) -> CoordinatePair {
        CoordinatePair::new(Some(a), Some(b))
    }

    #[test]
    fn same_point_is_zero() {
        let a = coord(40.7128, -74.0060);
        assert!(haversine_km(a, a).abs() < 1e-9);
    }

    #[test]
    fn known_distance() {
        // One degree of latitude along a meridian: R * pi / 180
        let a = coord(0.0, 0.0);
        let b = coord(1.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((haversine_km(a, b) - expected).abs() < 1e-9);
    }

    #[test]
    fn city_scale_distance() {
        // Roughly 1.1 km between two Manhattan points
        let a = coord(40.7411, -73.9897);
        let b = coord(40.7510, -73.9940);
        let km = haversine_km(a, b);
        assert!(km > 1.0 && km < 1.3, "got {km}");
    }

    #[test]
    fn antipodal_points_do_not_nan() {
        let km = haversine_km(coord(0.0, 0.0), coord(0.0, 180.0));
        assert!(km.is_finite());
        assert!((km - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn excludes_partial_pairs() {
        let a = coord(0.0, 0.0);
        let b = coord(1.0, 0.0);
        let pairs = [
            pair(a, b),
            CoordinatePair::new(None, Some(b)),
            CoordinatePair::new(Some(a), None),
        ];
        assert_eq!(estimate_distance(&pairs), Some(haversine_km(a, b)));
    }

    #[test]
    fn all_missing_is_unknown() {
        let b = coord(1.0, 0.0);
        let pairs = [CoordinatePair::new(None, Some(b)), CoordinatePair::default()];
        assert_eq!(estimate_distance(&pairs), None);
        assert_eq!(estimate_distance(&[]), None);
    }

    #[test]
    fn zero_distance_is_not_unknown() {
        let a = coord(0.0, 0.0);
        assert_eq!(estimate_distance(&[pair(a, a)]), Some(0.0));
    }

    #[test]
    fn averages_valid_samples() {
        let a = coord(0.0, 0.0);
        let b = coord(1.0, 0.0);
        let c = coord(3.0, 0.0);
        let d1 = haversine_km(a, b);
        let d2 = haversine_km(a, c);
        let mean = estimate_distance(&[pair(a, b), pair(a, c)]).unwrap();
        assert!((mean - (d1 + d2) / 2.0).abs() < 1e-9);
    }
}
