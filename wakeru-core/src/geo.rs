//! Haversine great-circle distance.

use crate::model::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters.
///
/// Coincident points yield `0.0`. The haversine term is clamped to `[0, 1]`
/// so rounding near antipodes cannot produce NaN.
#[must_use]
pub fn distance_meters(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat_from = from.latitude.to_radians();
    let lat_to = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    let half_chord = (d_lat / 2.0).sin().powi(2)
        + lat_from.cos() * lat_to.cos() * (d_lng / 2.0).sin().powi(2);
    let half_chord = half_chord.clamp(0.0, 1.0);

    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_METERS * angle
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    fn sample_points() -> Vec<GeoPoint> {
        let mut points = Vec::new();
        for lat in [-89.9, -45.0, -12.5, 0.0, 33.1599, 33.28, 60.0, 90.0] {
            for lng in [-180.0, -120.3, -1.0, 0.0, 131.49, 131.6046, 179.9] {
                points.push(GeoPoint::new(lat, lng));
            }
        }
        points
    }

    #[test]
    fn identical_points_are_zero_apart() {
        for point in sample_points() {
            assert_abs_diff_eq!(distance_meters(point, point), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let points = sample_points();
        for first in &points {
            for second in &points {
                assert_relative_eq!(
                    distance_meters(*first, *second),
                    distance_meters(*second, *first),
                    epsilon = 1e-6
                );
            }
        }
    }

    #[test]
    fn distance_satisfies_triangle_inequality() {
        let points = sample_points();
        for first in points.iter().step_by(3) {
            for second in points.iter().step_by(5) {
                for third in points.iter().step_by(7) {
                    let direct = distance_meters(*first, *third);
                    let detour =
                        distance_meters(*first, *second) + distance_meters(*second, *third);
                    assert!(direct <= detour + 1e-3, "{direct} > {detour}");
                }
            }
        }
    }

    #[test]
    fn antipodal_points_are_half_circumference_apart() {
        let distance = distance_meters(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert!(distance.is_finite());
        assert_relative_eq!(distance, PI * EARTH_RADIUS_METERS, max_relative = 1e-9);

        let poles = distance_meters(GeoPoint::new(90.0, 0.0), GeoPoint::new(-90.0, 0.0));
        assert_relative_eq!(poles, PI * EARTH_RADIUS_METERS, max_relative = 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let distance = distance_meters(GeoPoint::new(33.0, 131.0), GeoPoint::new(34.0, 131.0));
        assert_relative_eq!(distance, 111_194.9, max_relative = 1e-4);
    }

    #[test]
    fn point_ten_km_north_of_campus_is_far_outside_800_m() {
        let campus = GeoPoint::new(33.1599, 131.6046);
        let distance = distance_meters(campus, GeoPoint::new(33.25, 131.60));
        assert!(distance > 9_000.0 && distance < 11_000.0, "{distance}");
    }
}
