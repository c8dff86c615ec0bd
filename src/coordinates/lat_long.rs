use serde::{Deserialize, Serialize};

use crate::constants::Degree;
use crate::coordinates::geocentric::GeocentricCoordinates;
use crate::geometry::floored_mod;

/// Ground location of an observer, in degrees.
///
/// Construction silently enforces the limits: latitude is clamped to [−90, 90]
/// and longitude (east positive) is wrapped into (−180, 180].
/// Deserialization goes through the same path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLatLong")]
pub struct LatLong {
    latitude: Degree,
    longitude: Degree,
}

#[derive(Deserialize)]
struct RawLatLong {
    latitude: Degree,
    longitude: Degree,
}

impl From<RawLatLong> for LatLong {
    fn from(raw: RawLatLong) -> Self {
        LatLong::new(raw.latitude, raw.longitude)
    }
}

impl LatLong {
    pub fn new(latitude: Degree, longitude: Degree) -> Self {
        LatLong {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: 180.0 - floored_mod(180.0 - longitude, 360.0),
        }
    }

    pub fn latitude(&self) -> Degree {
        self.latitude
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }

    /// Unit vector of the location in an Earth-fixed frame.
    ///
    /// The longitude plays the role of the right ascension; only meaningful for
    /// angles between locations.
    pub fn to_geocentric(&self) -> GeocentricCoordinates {
        GeocentricCoordinates::from_ra_dec(self.longitude, self.latitude)
    }

    /// Great-circle angle between two locations, in degrees.
    pub fn distance_from(&self, other: &LatLong) -> Degree {
        self.to_geocentric().angular_distance(&other.to_geocentric())
    }
}

#[cfg(test)]
mod lat_long_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_limits() {
        let loc = LatLong::new(95.0, 190.0);
        assert_eq!(loc.latitude(), 90.0);
        assert_eq!(loc.longitude(), -170.0);

        let loc = LatLong::new(-100.0, -190.0);
        assert_eq!(loc.latitude(), -90.0);
        assert_eq!(loc.longitude(), 170.0);

        assert_eq!(LatLong::new(0.0, 180.0).longitude(), 180.0);
        assert_eq!(LatLong::new(0.0, -180.0).longitude(), 180.0);
        assert_eq!(LatLong::new(0.0, 540.0).longitude(), 180.0);
        assert_eq!(LatLong::new(12.5, -73.25).longitude(), -73.25);
    }

    #[test]
    fn test_distance_from() {
        let a = LatLong::new(0.0, 0.0);
        assert_relative_eq!(a.distance_from(&LatLong::new(0.0, 90.0)), 90.0, epsilon = 1e-9);
        assert_relative_eq!(a.distance_from(&LatLong::new(90.0, 42.0)), 90.0, epsilon = 1e-9);
        assert_relative_eq!(a.distance_from(&a), 0.0, epsilon = 1e-6);

        // across the antimeridian
        let b = LatLong::new(10.0, 179.0);
        let c = LatLong::new(10.0, -179.0);
        assert!(b.distance_from(&c) < 2.0);
    }

    #[test]
    fn test_deserialization_clamps() {
        let raw = RawLatLong {
            latitude: 120.0,
            longitude: 200.0,
        };
        let loc = LatLong::from(raw);
        assert_eq!(loc, LatLong::new(90.0, -160.0));
    }
}
