use crate::models::GeoPoint;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Calculate distance between two points in meters using the Haversine formula.
///
/// Coordinates are not range-checked; out-of-range input yields a finite but
/// meaningless number rather than a panic.
pub fn haversine_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can leave h just above 1 for nearly antipodal points
    let h = h.clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Distance between two possibly unknown points.
///
/// Returns `0.0` when either side is missing. That is a display fallback
/// ("0m"), not a measurement.
pub fn distance(from: Option<&GeoPoint>, to: Option<&GeoPoint>) -> f64 {
    match (from, to) {
        (Some(from), Some(to)) => haversine_distance(from, to),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: GeoPoint = GeoPoint {
        latitude: 51.5007,
        longitude: -0.1246,
    };
    const PARIS: GeoPoint = GeoPoint {
        latitude: 48.8566,
        longitude: 2.3522,
    };

    #[test]
    fn test_same_point_is_zero() {
        for point in [
            LONDON,
            PARIS,
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(90.0, 0.0),
            GeoPoint::new(-33.8688, 151.2093),
        ] {
            assert_eq!(haversine_distance(&point, &point), 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (LONDON, PARIS),
            (GeoPoint::new(37.7749, -122.4194), GeoPoint::new(37.4419, -122.1430)),
            (GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(35.6762, 139.6503)),
        ];
        for (a, b) in pairs {
            let forward = haversine_distance(&a, &b);
            let backward = haversine_distance(&b, &a);
            assert!((forward - backward).abs() < 1e-6, "{} != {}", forward, backward);
        }
    }

    #[test]
    fn test_london_to_paris() {
        let d = haversine_distance(&LONDON, &PARIS);
        assert!((d - 343_500.0).abs() < 1_500.0, "got {}m", d);
    }

    #[test]
    fn test_short_distance() {
        // ~100m north
        let d = haversine_distance(
            &GeoPoint::new(37.7749, -122.4194),
            &GeoPoint::new(37.7758, -122.4194),
        );
        assert!((d - 100.0).abs() < 20.0);
    }

    #[test]
    fn test_antimeridian() {
        let west = GeoPoint::new(0.0, 179.9);
        let east = GeoPoint::new(0.0, -179.9);
        let d = haversine_distance(&west, &east);
        // 0.2 degrees of longitude at the equator, not 359.8
        assert!((d - 22_239.0).abs() < 100.0, "got {}m", d);
    }

    #[test]
    fn test_antipodes() {
        let d = haversine_distance(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1.0);
    }

    #[test]
    fn test_nearly_antipodal_points_stay_finite() {
        let south = GeoPoint::new(-87.5, -180.0);
        let north = GeoPoint::new(87.5, 0.0);
        assert!(south.is_valid() && north.is_valid());

        let there = haversine_distance(&south, &north);
        let back = haversine_distance(&north, &south);
        assert!(there.is_finite(), "got {}", there);
        assert!((there - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1.0);
        assert_eq!(there, back);
    }

    #[test]
    fn test_antipodal_sweep_stays_finite() {
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lon = -180.0;
            while lon <= 0.0 {
                let a = GeoPoint::new(lat, lon);
                let b = GeoPoint::new(-lat, lon + 180.0);
                let d = haversine_distance(&a, &b);
                assert!(d.is_finite(), "NaN for {:?} -> {:?}", a, b);
                lon += 1.0;
            }
            lat += 0.1;
        }
    }

    #[test]
    fn test_missing_point_falls_back_to_zero() {
        assert_eq!(distance(None, Some(&PARIS)), 0.0);
        assert_eq!(distance(Some(&LONDON), None), 0.0);
        assert_eq!(distance(None, None), 0.0);
        assert_eq!(
            distance(Some(&LONDON), Some(&PARIS)),
            haversine_distance(&LONDON, &PARIS)
        );
    }

    #[test]
    fn test_out_of_range_input_does_not_panic() {
        let d = haversine_distance(&GeoPoint::new(123.0, 500.0), &GeoPoint::new(-200.0, 0.0));
        assert!(d.is_finite());
    }
}
