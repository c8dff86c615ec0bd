//! # 3-D vector and rotation helpers
//!
//! The algebra itself (dot/cross product, scaling, sums, matrix products) is
//! [`nalgebra`]'s: [`Vector3<f64>`] and [`Matrix3<f64>`] are `Copy` value types,
//! so every operation here returns a fresh value and never aliases its inputs.
//! This module adds the few domain helpers the ephemeris engine needs on top:
//!
//! - angle reduction ([`mod2pi`], [`floored_mod`]),
//! - normalization with a debug-time guard against zero vectors,
//! - cosine similarity between directions,
//! - rotation matrices about an arbitrary unit axis.
//!
//! The 4×4 matrices consumed by the renderer live in [`crate::projection`].

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};

use crate::constants::{Degree, Radian, DPI, RADEG};

/// Reduce an angle in radians to the principal interval [0, 2π).
///
/// Idempotent: `mod2pi(mod2pi(x)) == mod2pi(x)` for every finite `x`.
pub fn mod2pi(x: Radian) -> Radian {
    let reduced = x.rem_euclid(DPI);
    // rem_euclid rounds tiny negative inputs up to exactly 2π
    if reduced >= DPI {
        0.0
    } else {
        reduced
    }
}

/// Floored modulo for a positive modulus `n`, result in [0, n).
pub fn floored_mod(a: f64, n: f64) -> f64 {
    debug_assert!(n > 0.0, "floored_mod requires a positive modulus, got {n}");
    if a < 0.0 {
        (a % n + n) % n
    } else {
        a % n
    }
}

/// Return the unit vector pointing along `v`.
///
/// The caller must never pass a zero vector: the result would be NaN.
/// Debug builds assert on it.
pub fn normalized(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    debug_assert!(norm > 0.0, "cannot normalize a zero-length vector");
    v / norm
}

/// In-place variant of [`normalized`].
pub fn normalize_in_place(v: &mut Vector3<f64>) {
    let norm = v.norm();
    debug_assert!(norm > 0.0, "cannot normalize a zero-length vector");
    *v /= norm;
}

/// Cosine of the angle between two non-zero vectors.
pub fn cosine_similarity(v1: &Vector3<f64>, v2: &Vector3<f64>) -> f64 {
    v1.dot(v2) / (v1.norm_squared() * v2.norm_squared()).sqrt()
}

/// Angle in degrees between two non-zero vectors, robust to rounding past ±1.
pub fn angle_between(v1: &Vector3<f64>, v2: &Vector3<f64>) -> Degree {
    cosine_similarity(v1, v2).clamp(-1.0, 1.0).acos() / RADEG
}

/// Rotation matrix of `degrees` about `axis`.
///
/// The axis must already be normalized, hence the [`Unit`] wrapper; build it with
/// [`Unit::new_normalize`] when in doubt. The rotation is active and right-handed:
/// `R · v` turns `v` counter-clockwise when looking down the axis toward the origin.
pub fn rotation_matrix(degrees: Degree, axis: &Unit<Vector3<f64>>) -> Matrix3<f64> {
    debug_assert!(
        (axis.norm() - 1.0).abs() < 1e-9,
        "rotation axis must be a unit vector"
    );
    Rotation3::from_axis_angle(axis, degrees * RADEG).into()
}

#[cfg(test)]
mod geometry_test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_mod2pi_range_and_idempotence() {
        let samples = [
            -100.0, -DPI, -3.5, -1e-20, 0.0, 1e-20, 1.0, 3.0, DPI, DPI + 0.5, 7.0 * DPI, 1e6,
        ];
        for x in samples {
            let once = mod2pi(x);
            assert!((0.0..DPI).contains(&once), "mod2pi({x}) = {once}");
            assert_eq!(mod2pi(once), once);
        }
        assert_abs_diff_eq!(
            mod2pi(-std::f64::consts::FRAC_PI_2),
            1.5 * std::f64::consts::PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_floored_mod() {
        assert_eq!(floored_mod(190.0 + 180.0, 360.0) - 180.0, -170.0);
        assert_eq!(floored_mod(-190.0 + 180.0, 360.0) - 180.0, 170.0);
        assert_eq!(floored_mod(-360.0, 360.0), 0.0);
    }

    #[test]
    fn test_normalize_unit_length() {
        let vectors = [
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(-1e-8, 2e-8, 5e-9),
            Vector3::new(1e8, -3e7, 42.0),
            Vector3::new(0.0, 0.0, -7.0),
        ];
        for v in vectors {
            assert_abs_diff_eq!(normalized(&v).norm(), 1.0, epsilon = 1e-9);

            let mut w = v;
            normalize_in_place(&mut w);
            assert_eq!(w, normalized(&v));
        }
    }

    #[test]
    fn test_products_are_value_semantics() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        let c = a.cross(&b);
        assert_eq!(c, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a + b * 2.0, Vector3::new(1.0, 2.0, 0.0));
        // inputs untouched
        assert_eq!(a, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_cosine_similarity() {
        let a = Vector3::new(2.0, 0.0, 0.0);
        let b = Vector3::new(5.0, 5.0, 0.0);
        assert_relative_eq!(
            cosine_similarity(&a, &b),
            std::f64::consts::FRAC_1_SQRT_2,
            epsilon = 1e-12
        );
        assert_relative_eq!(angle_between(&a, &b), 45.0, epsilon = 1e-12);
        assert_relative_eq!(angle_between(&a, &a), 0.0);
    }

    #[test]
    fn test_rotation_zero_is_identity() {
        let axis = Unit::new_normalize(Vector3::new(1.0, -2.0, 0.5));
        let rot = rotation_matrix(0.0, &axis);
        assert_relative_eq!(rot, Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_rotation_inverse_composition() {
        let axis = Unit::new_normalize(Vector3::new(0.3, 0.4, -0.866));
        for theta in [1.0, 33.3, 90.0, 179.0, -250.0] {
            let forward = rotation_matrix(theta, &axis);
            let backward = rotation_matrix(-theta, &axis);
            assert_relative_eq!(backward * forward, Matrix3::identity(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rotation_about_z() {
        let rot = rotation_matrix(90.0, &Vector3::z_axis());
        let v = rot * Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);
    }
}
