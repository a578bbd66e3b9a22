//! Great-circle distance helpers.

use crate::models::Coordinates;

/// Earth's mean radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometers.
///
/// Returns `NaN` if either coordinate is non-finite; callers filter on a
/// threshold, and `NaN <= threshold` is false, so malformed points drop out
/// rather than reaching the presentation layer.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates {
            latitude,
            longitude,
        }
    }

    #[test]
    fn zero_distance_for_identical_points() {
        let p = point(37.1697, -104.5047);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn matches_known_distance_between_tour_stops() {
        // Post Office to Opera House, roughly 200 meters apart downtown.
        let post_office = point(37.1697, -104.5047);
        let opera_house = point(37.1693, -104.5069);

        let d = haversine_km(post_office, opera_house);
        assert!(d > 0.1 && d < 0.3, "unexpected distance: {d}");
    }

    #[test]
    fn is_symmetric() {
        let a = point(37.1697, -104.5047);
        let b = point(37.1672, -104.5103);

        let ab = haversine_km(a, b);
        let ba = haversine_km(b, a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn propagates_nan_for_malformed_coordinates() {
        let good = point(37.1697, -104.5047);
        let bad = point(f64::NAN, -104.5069);

        assert!(haversine_km(good, bad).is_nan());
    }
}
