use nalgebra::Vector3;

use crate::constants::{Degree, DEGRAD, RADEG};
use crate::coordinates::ra_dec::RaDec;
use crate::geometry::{angle_between, mod2pi, normalized};

/// Unit direction on the celestial sphere, equatorial J2000 axes.
///
/// x points to RA 0° / Dec 0°, y to RA 90° / Dec 0°, z to the north celestial pole.
/// Every constructor yields a unit vector; nothing checks it afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricCoordinates(Vector3<f64>);

impl GeocentricCoordinates {
    /// Direction of right ascension `ra` and declination `dec`, in degrees.
    pub fn from_ra_dec(ra: Degree, dec: Degree) -> Self {
        let (sin_ra, cos_ra) = (ra * RADEG).sin_cos();
        let (sin_dec, cos_dec) = (dec * RADEG).sin_cos();
        GeocentricCoordinates(Vector3::new(cos_ra * cos_dec, sin_ra * cos_dec, sin_dec))
    }

    /// Normalize a non-zero equatorial vector into a direction.
    pub fn from_vector(v: &Vector3<f64>) -> Self {
        GeocentricCoordinates(normalized(v))
    }

    pub fn vector(&self) -> &Vector3<f64> {
        &self.0
    }

    pub fn to_ra_dec(&self) -> RaDec {
        let v = &self.0;
        RaDec::new(
            mod2pi(v.y.atan2(v.x)) * DEGRAD,
            v.z.atan2(v.x.hypot(v.y)) * DEGRAD,
        )
    }

    /// Angle between two directions, in degrees.
    pub fn angular_distance(&self, other: &Self) -> Degree {
        angle_between(&self.0, &other.0)
    }
}

impl From<RaDec> for GeocentricCoordinates {
    fn from(ra_dec: RaDec) -> Self {
        GeocentricCoordinates::from_ra_dec(ra_dec.ra, ra_dec.dec)
    }
}

#[cfg(test)]
mod geocentric_test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_unit_length() {
        for (ra, dec) in [(0.0, 0.0), (123.4, -56.7), (359.9, 89.9), (45.0, -90.0)] {
            let g = GeocentricCoordinates::from_ra_dec(ra, dec);
            assert_relative_eq!(g.vector().norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_round_trip_grid() {
        for ra_step in 0..24 {
            for dec_step in 0..=12 {
                let ra = ra_step as f64 * 15.0 + 0.25;
                let dec = -90.0 + dec_step as f64 * 15.0;
                let back = GeocentricCoordinates::from_ra_dec(ra, dec).to_ra_dec();
                assert_abs_diff_eq!(back.dec, dec, epsilon = 1e-9);
                // right ascension is undefined at the poles
                if dec.abs() < 90.0 {
                    assert_abs_diff_eq!(back.ra, ra, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_from_vector_and_conversion() {
        let g = GeocentricCoordinates::from_vector(&Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(*g.vector(), Vector3::new(0.0, 0.0, 1.0));

        let g: GeocentricCoordinates = RaDec::new(90.0, 0.0).into();
        assert_relative_eq!(*g.vector(), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_angular_distance() {
        let a = GeocentricCoordinates::from_ra_dec(10.0, 0.0);
        let b = GeocentricCoordinates::from_ra_dec(40.0, 0.0);
        assert_relative_eq!(a.angular_distance(&b), 30.0, epsilon = 1e-9);
        let pole = GeocentricCoordinates::from_ra_dec(0.0, 90.0);
        assert_relative_eq!(a.angular_distance(&pole), 90.0, epsilon = 1e-9);
    }
}
