//! # Low-precision lunar series
//!
//! The Moon is too perturbed by the Earth and the Sun for the single Keplerian
//! ellipse used by the planets. Its geocentric ecliptic longitude, latitude and
//! horizontal parallax are instead given by a short trigonometric series in
//! Julian centuries since J2000, good to a few tenths of a degree.
//!
//! The ecliptic → equatorial conversion is done on the direction cosines with
//! four-digit values of cos ε and sin ε, which is the accuracy of the series.

use hifitime::Epoch;

use crate::constants::{Degree, DEGRAD, RADEG};
use crate::coordinates::ra_dec::RaDec;
use crate::geometry::mod2pi;
use crate::time::julian_centuries;

/// cos ε at the precision of the series
const COS_OBLIQUITY: f64 = 0.9175;
/// sin ε at the precision of the series
const SIN_OBLIQUITY: f64 = 0.3978;

/// Geocentric position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    /// Ecliptic longitude λ (degrees, not reduced)
    pub ecliptic_longitude: Degree,
    /// Ecliptic latitude β (degrees)
    pub ecliptic_latitude: Degree,
    /// Equatorial RA/Dec
    pub ra_dec: RaDec,
    /// Horizontal parallax (degrees)
    pub parallax: Degree,
}

impl LunarPosition {
    /// Earth–Moon distance in Earth radii, `1 / sin(π)`.
    pub fn distance_earth_radii(&self) -> f64 {
        1.0 / (self.parallax * RADEG).sin()
    }
}

fn sin_deg(x: Degree) -> f64 {
    (x * RADEG).sin()
}

fn cos_deg(x: Degree) -> f64 {
    (x * RADEG).cos()
}

/// Evaluate the lunar series at a UTC instant.
pub fn lunar_position(epoch: &Epoch) -> LunarPosition {
    let t = julian_centuries(epoch);

    let lambda = 218.32 + 481267.881 * t
        + 6.29 * sin_deg(135.0 + 477198.87 * t)
        - 1.27 * sin_deg(259.3 - 413335.36 * t)
        + 0.66 * sin_deg(235.7 + 890534.22 * t)
        + 0.21 * sin_deg(269.9 + 954397.74 * t)
        - 0.19 * sin_deg(357.5 + 35999.05 * t)
        - 0.11 * sin_deg(186.5 + 966404.03 * t);

    let beta = 5.13 * sin_deg(93.3 + 483202.02 * t)
        + 0.28 * sin_deg(228.2 + 960400.89 * t)
        - 0.28 * sin_deg(318.3 + 6003.15 * t)
        - 0.17 * sin_deg(217.6 - 407332.21 * t);

    let parallax = 0.9508
        + 0.0518 * cos_deg(135.0 + 477198.87 * t)
        + 0.0095 * cos_deg(259.3 - 413335.36 * t)
        + 0.0078 * cos_deg(235.7 + 890534.22 * t)
        + 0.0028 * cos_deg(269.9 + 954397.74 * t);

    LunarPosition {
        ecliptic_longitude: lambda,
        ecliptic_latitude: beta,
        ra_dec: ecliptic_to_ra_dec(lambda, beta),
        parallax,
    }
}

/// Geocentric RA/Dec of the Moon at a UTC instant.
pub fn lunar_geocentric_location(epoch: &Epoch) -> RaDec {
    lunar_position(epoch).ra_dec
}

fn ecliptic_to_ra_dec(lambda: Degree, beta: Degree) -> RaDec {
    let (sin_l, cos_l) = (lambda * RADEG).sin_cos();
    let (sin_b, cos_b) = (beta * RADEG).sin_cos();

    let l = cos_b * cos_l;
    let m = COS_OBLIQUITY * cos_b * sin_l - SIN_OBLIQUITY * sin_b;
    let n = SIN_OBLIQUITY * cos_b * sin_l + COS_OBLIQUITY * sin_b;

    RaDec::new(
        mod2pi(m.atan2(l)) * DEGRAD,
        n.clamp(-1.0, 1.0).asin() * DEGRAD,
    )
}

#[cfg(test)]
mod lunar_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ecliptic_conversion() {
        // vernal equinox direction is common to both frames
        let rd = ecliptic_to_ra_dec(0.0, 0.0);
        assert_abs_diff_eq!(rd.ra, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rd.dec, 0.0, epsilon = 1e-12);

        // λ = 90° on the ecliptic sits at Dec ≈ +ε
        let rd = ecliptic_to_ra_dec(90.0, 0.0);
        assert_abs_diff_eq!(rd.ra, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rd.dec, 23.44, epsilon = 0.01);
    }

    #[test]
    fn test_position_ranges() {
        let epoch = Epoch::from_gregorian_utc(2024, 1, 25, 17, 54, 0, 0);
        let pos = lunar_position(&epoch);
        assert!((0.0..360.0).contains(&pos.ra_dec.ra));
        assert!(pos.ra_dec.dec.abs() <= 28.7);
        assert!(pos.ecliptic_latitude.abs() <= 5.9);
        // 356 000 – 407 000 km
        let d = pos.distance_earth_radii();
        assert!((55.0..65.0).contains(&d), "distance {d} Earth radii");
    }

    #[test]
    fn test_full_moon_opposite_to_sun() {
        // full moon of 2024-01-25 17:54 UTC: Sun at λ ≈ 305°, Moon at λ ≈ 125°
        let epoch = Epoch::from_gregorian_utc(2024, 1, 25, 17, 54, 0, 0);
        let lambda = lunar_position(&epoch).ecliptic_longitude.rem_euclid(360.0);
        assert!((lambda - 125.0).abs() < 3.0, "lambda = {lambda}");
    }
}
