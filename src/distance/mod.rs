//! # Distance Filter
//!
//! Great-circle distance on the WGS-84 ellipsoid, in kilometres.
//!
//! Latitudes outside [-90, 90] and non-finite inputs have no geodesic and
//! are rejected. Longitudes wrap, so any finite longitude is accepted.

use geo::{GeodesicDistance, Point};
use thiserror::Error;

use crate::address::Coordinates;

const METRES_PER_KM: f64 = 1000.0;

/// Result type for distance computations
pub type DistanceResult<T> = Result<T, DistanceError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("Coordinates ({0}, {1}) are not finite")]
    NotFinite(f64, f64),
}

fn to_point(c: Coordinates) -> DistanceResult<Point<f64>> {
    if !c.latitude.is_finite() || !c.longitude.is_finite() {
        return Err(DistanceError::NotFinite(c.latitude, c.longitude));
    }
    if !(-90.0..=90.0).contains(&c.latitude) {
        return Err(DistanceError::LatitudeOutOfRange(c.latitude));
    }
    // geo points are (x, y) = (longitude, latitude)
    Ok(Point::new(c.longitude, c.latitude))
}

/// Geodesic distance between two coordinate pairs in kilometres
pub fn geodesic_km(a: Coordinates, b: Coordinates) -> DistanceResult<f64> {
    let metres = to_point(a)?.geodesic_distance(&to_point(b)?);
    if !metres.is_finite() {
        return Err(DistanceError::NotFinite(b.latitude, b.longitude));
    }
    Ok(metres / METRES_PER_KM)
}

/// Whether `b` lies within `max_km` of `a`. The boundary is inclusive.
pub fn within_distance(a: Coordinates, b: Coordinates, max_km: f64) -> DistanceResult<bool> {
    Ok(geodesic_km(a, b)? <= max_km)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRINGFIELD: Coordinates = Coordinates {
        latitude: 39.78,
        longitude: -89.65,
    };

    #[test]
    fn test_same_point_is_zero() {
        assert!(geodesic_km(SPRINGFIELD, SPRINGFIELD).unwrap().abs() < 1e-9);
        assert!(within_distance(SPRINGFIELD, SPRINGFIELD, 1e-6).unwrap());
    }

    #[test]
    fn test_one_degree_of_latitude_at_equator() {
        let d = geodesic_km(Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 0.0)).unwrap();
        // ~110.574 km on WGS-84
        assert!((d - 110.574).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_symmetric() {
        let chicago = Coordinates::new(41.8781, -87.6298);
        let ab = geodesic_km(SPRINGFIELD, chicago).unwrap();
        let ba = geodesic_km(chicago, SPRINGFIELD).unwrap();
        assert!((ab - ba).abs() < 1e-9);
        assert!(ab > 250.0 && ab < 300.0, "got {}", ab);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let chicago = Coordinates::new(41.8781, -87.6298);
        let exact = geodesic_km(SPRINGFIELD, chicago).unwrap();

        assert!(within_distance(SPRINGFIELD, chicago, exact).unwrap());
        assert!(!within_distance(SPRINGFIELD, chicago, exact - 0.001).unwrap());
    }

    #[test]
    fn test_negative_or_nan_threshold_matches_nothing() {
        assert!(!within_distance(SPRINGFIELD, SPRINGFIELD, -1.0).unwrap());
        assert!(!within_distance(SPRINGFIELD, SPRINGFIELD, f64::NAN).unwrap());
    }

    #[test]
    fn test_latitude_out_of_range_is_error() {
        let origin = Coordinates::new(0.0, 0.0);
        assert_eq!(
            geodesic_km(Coordinates::new(123.0, 500.0), origin),
            Err(DistanceError::LatitudeOutOfRange(123.0))
        );
        assert_eq!(
            geodesic_km(origin, Coordinates::new(-90.5, 0.0)),
            Err(DistanceError::LatitudeOutOfRange(-90.5))
        );
    }

    #[test]
    fn test_non_finite_is_error() {
        let origin = Coordinates::new(0.0, 0.0);
        for bad in [
            Coordinates::new(f64::INFINITY, 0.0),
            Coordinates::new(f64::NAN, 0.0),
            Coordinates::new(0.0, f64::NEG_INFINITY),
        ] {
            assert!(matches!(
                within_distance(bad, origin, 1e9),
                Err(DistanceError::NotFinite(_, _))
            ));
        }
    }

    #[test]
    fn test_longitude_wraps() {
        let a = geodesic_km(Coordinates::new(10.0, 500.0), Coordinates::new(0.0, 0.0)).unwrap();
        let b = geodesic_km(Coordinates::new(10.0, 140.0), Coordinates::new(0.0, 0.0)).unwrap();
        assert!((a - b).abs() < 1e-6, "{} vs {}", a, b);
    }
}
