//! # Reference frames of the ephemeris engine
//!
//! The low-precision model only ever works in two frames, both tied to the mean
//! equinox of J2000:
//!
//! - [`Ecliptic`]: heliocentric ecliptic J2000, the frame the Keplerian element
//!   tables are expressed in,
//! - [`Equatorial`]: equatorial J2000, the frame right ascension and declination
//!   are read from.
//!
//! The two markers are zero-sized types used as the phantom parameter of
//! [`HeliocentricCoordinates`](crate::coordinates::heliocentric::HeliocentricCoordinates),
//! so that the obliquity rotation can only be applied once and two vectors of
//! different frames cannot be subtracted from each other.
//!
//! [`RefSystem`] is the run-time counterpart of the markers, used to build the
//! rotation matrices held by the [`Skyward`](crate::skyward::Skyward) façade.

use std::fmt::Debug;

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Radian, OBLIQUITY_J2000};

mod sealed {
    pub trait Sealed {}
}

/// A reference frame a coordinate vector can be expressed in.
///
/// Sealed: only [`Ecliptic`] and [`Equatorial`] implement it.
pub trait Frame: sealed::Sealed + Copy + Debug + PartialEq {
    const SYSTEM: RefSystem;
}

/// Heliocentric ecliptic frame, mean equinox J2000
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ecliptic;

/// Equatorial frame, mean equinox J2000
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equatorial;

impl sealed::Sealed for Ecliptic {}
impl sealed::Sealed for Equatorial {}

impl Frame for Ecliptic {
    const SYSTEM: RefSystem = RefSystem::Eclm;
}

impl Frame for Equatorial {
    const SYSTEM: RefSystem = RefSystem::Equm;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefSystem {
    // Ecliptic mean J2000
    Eclm,
    // Equatorial mean J2000
    Equm,
}

/// Rotation matrix taking a vector expressed in `from` to the same vector expressed in `to`.
///
/// Arguments
/// ---------
/// * `from`: source frame
/// * `to`: target frame
///
/// Return
/// ------
/// * `R` such that `x_to = R · x_from`
///
/// Details
/// -------
/// The only rotation involved is the fixed J2000 obliquity about the x axis
/// (the vernal equinox direction, common to both frames):
///
/// ```text
/// y' = y·cos ε − z·sin ε
/// z' = y·sin ε + z·cos ε
/// ```
pub fn rotpn(from: RefSystem, to: RefSystem) -> Matrix3<f64> {
    match (from, to) {
        (RefSystem::Eclm, RefSystem::Equm) => rotmt(OBLIQUITY_J2000, 0),
        (RefSystem::Equm, RefSystem::Eclm) => rotmt(-OBLIQUITY_J2000, 0),
        (RefSystem::Eclm, RefSystem::Eclm) | (RefSystem::Equm, RefSystem::Equm) => {
            Matrix3::identity()
        }
    }
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes (X, Y, or Z).
///
/// This function builds a [`nalgebra::Matrix3`] representing an **active rotation**
/// of a 3D vector by an angle `alpha` around the chosen axis.
/// The rotation follows the **direct (positive/trigonometric)** sense:
/// counter-clockwise when looking **along the axis toward the origin**.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians** (positive = direct/trigonometric sense).
/// * `k` - Index of the axis of rotation:
///   * `0` → X-axis
///   * `1` → Y-axis
///   * `2` → Z-axis
///
/// # Returns
///
/// A 3×3 rotation matrix `R` such that the rotated vector is `x' = R · x`.
///
/// # Panics
///
/// Panics if `k > 2`, as only axes 0–2 are valid.
pub fn rotmt(alpha: Radian, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

#[cfg(test)]
mod ref_system_test {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_obliquity_rotation_formula() {
        let rot = rotpn(RefSystem::Eclm, RefSystem::Equm);
        let (s, c) = OBLIQUITY_J2000.sin_cos();
        let v = Vector3::new(0.3, -1.2, 0.7);
        let expected = Vector3::new(v.x, v.y * c - v.z * s, v.y * s + v.z * c);
        assert_relative_eq!(rot * v, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_round_trip_is_identity() {
        let forward = rotpn(Ecliptic::SYSTEM, Equatorial::SYSTEM);
        let backward = rotpn(Equatorial::SYSTEM, Ecliptic::SYSTEM);
        assert_relative_eq!(backward * forward, Matrix3::identity(), epsilon = 1e-15);
        assert_relative_eq!(forward.transpose(), backward, epsilon = 1e-15);
        assert_eq!(rotpn(RefSystem::Equm, RefSystem::Equm), Matrix3::identity());
    }

    #[test]
    fn test_ecliptic_pole_direction() {
        // the ecliptic north pole sits at RA 270°, Dec 90° − ε
        let pole = rotpn(RefSystem::Eclm, RefSystem::Equm) * Vector3::z();
        assert_relative_eq!(pole.z, OBLIQUITY_J2000.cos(), epsilon = 1e-15);
        assert_relative_eq!(pole.y, -OBLIQUITY_J2000.sin(), epsilon = 1e-15);
        assert_relative_eq!(pole.x, 0.0);
    }

    #[test]
    fn test_rotmt_about_z() {
        let rot = rotmt(std::f64::consts::FRAC_PI_2, 2);
        assert_relative_eq!(
            rot * Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            epsilon = 1e-15
        );
    }

    #[test]
    #[should_panic]
    fn test_rotmt_invalid_axis() {
        rotmt(1.0, 3);
    }
}
