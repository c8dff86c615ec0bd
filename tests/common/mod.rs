#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use hifitime::{Epoch, Unit};
use skyward::coordinates::RaDec;
use skyward::orbital_elements::OrbitalElements;

pub fn assert_elements_close(actual: &OrbitalElements, expected: &OrbitalElements, epsilon: f64) {
    assert_abs_diff_eq!(actual.distance, expected.distance, epsilon = epsilon);
    assert_abs_diff_eq!(
        actual.eccentricity,
        expected.eccentricity,
        epsilon = epsilon
    );
    assert_abs_diff_eq!(actual.inclination, expected.inclination, epsilon = epsilon);
    assert_abs_diff_eq!(
        actual.ascending_node,
        expected.ascending_node,
        epsilon = epsilon
    );
    assert_abs_diff_eq!(actual.perihelion, expected.perihelion, epsilon = epsilon);
    assert_abs_diff_eq!(
        actual.mean_longitude,
        expected.mean_longitude,
        epsilon = epsilon
    );
}

/// Angular separation in degrees, robust to RA wrap-around.
pub fn separation_deg(a: &RaDec, b: &RaDec) -> f64 {
    let ga: skyward::coordinates::GeocentricCoordinates = (*a).into();
    let gb: skyward::coordinates::GeocentricCoordinates = (*b).into();
    ga.angular_distance(&gb)
}

pub fn days_between(a: &Epoch, b: &Epoch) -> f64 {
    (*a - *b).to_unit(Unit::Day).abs()
}
