//! # Homogeneous 4×4 matrices for the sky renderer
//!
//! None of the ephemeris computations use these; they are the algebra a display
//! layer composes on top of the unit directions produced by the engine.
//! All matrices follow nalgebra's column-vector convention: a point `p` is mapped
//! to `M · [p, 1]`, and `A * B` applies `B` first.

use nalgebra::{Matrix4, Rotation3, Unit, Vector3};

use crate::constants::Radian;

/// Near clipping plane of the perspective projection
pub const NEAR_PLANE: f64 = 0.01;

/// Far clipping plane of the perspective projection
pub const FAR_PLANE: f64 = 10_000.0;

pub fn identity() -> Matrix4<f64> {
    Matrix4::identity()
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix4<f64> {
    Matrix4::new_nonuniform_scaling(&Vector3::new(x, y, z))
}

pub fn translation(x: f64, y: f64, z: f64) -> Matrix4<f64> {
    Matrix4::new_translation(&Vector3::new(x, y, z))
}

/// Rotation of `angle` radians about a unit `axis`, as a homogeneous matrix.
pub fn rotation(angle: Radian, axis: &Unit<Vector3<f64>>) -> Matrix4<f64> {
    Rotation3::from_axis_angle(axis, angle).to_homogeneous()
}

/// Perspective projection for a viewport of `width`×`height` pixels.
///
/// `fovy` is the vertical half field of view, in radians.
pub fn perspective_projection(width: f64, height: f64, fovy: Radian) -> Matrix4<f64> {
    let inverse_aspect_ratio = height / width;
    let focal = 1.0 / fovy.tan();
    let depth = FAR_PLANE - NEAR_PLANE;

    #[rustfmt::skip]
    let columns = [
        inverse_aspect_ratio * focal, 0.0, 0.0, 0.0,
        0.0, focal, 0.0, 0.0,
        0.0, 0.0, -(FAR_PLANE + NEAR_PLANE) / depth, -1.0,
        0.0, 0.0, -2.0 * FAR_PLANE * NEAR_PLANE / depth, 0.0,
    ];
    Matrix4::from_column_slice(&columns)
}

/// View matrix whose rows are the camera basis (`right`, `up`, `-look_dir`).
#[rustfmt::skip]
pub fn view(look_dir: &Vector3<f64>, up: &Vector3<f64>, right: &Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new(
        right.x, right.y, right.z, 0.0,
        up.x, up.y, up.z, 0.0,
        -look_dir.x, -look_dir.y, -look_dir.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Apply `mat` to the point `v` (implicit w = 1) and drop the resulting w.
pub fn multiply_mv(mat: &Matrix4<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    (mat * v.push(1.0)).xyz()
}

/// Perspective transform of the point `v`.
///
/// x and y are divided by the homogeneous w; z is left untouched as a pseudo-depth.
pub fn transform_vector(mat: &Matrix4<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    let h = mat * v.push(1.0);
    let one_over_w = 1.0 / h.w;
    Vector3::new(h.x * one_over_w, h.y * one_over_w, h.z)
}

#[cfg(test)]
mod projection_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translation_and_scaling() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(multiply_mv(&translation(1.0, -1.0, 0.5), &p), Vector3::new(2.0, 1.0, 3.5));
        assert_eq!(multiply_mv(&scaling(2.0, 3.0, 4.0), &p), Vector3::new(2.0, 6.0, 12.0));
        assert_eq!(multiply_mv(&identity(), &p), p);
    }

    #[test]
    fn test_composition_order() {
        // scale first, then translate
        let m = translation(1.0, 0.0, 0.0) * scaling(2.0, 2.0, 2.0);
        let p = multiply_mv(&m, &Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Vector3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn test_rotation_matches_axis_angle() {
        let m = rotation(std::f64::consts::FRAC_PI_2, &Vector3::z_axis());
        let p = multiply_mv(&m, &Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);

        let back = rotation(-std::f64::consts::FRAC_PI_2, &Vector3::z_axis()) * m;
        assert_relative_eq!(back, Matrix4::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_view_maps_look_dir_to_minus_z() {
        let look = Vector3::new(0.0, 1.0, 0.0);
        let up = Vector3::new(0.0, 0.0, 1.0);
        let right = look.cross(&up);
        let v = view(&look, &up, &right);
        assert_relative_eq!(multiply_mv(&v, &look), Vector3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(multiply_mv(&v, &up), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_transform_vector_keeps_pseudo_depth() {
        let proj = perspective_projection(100.0, 100.0, std::f64::consts::FRAC_PI_4);
        let p = Vector3::new(0.5, 0.25, -2.0);
        let t = transform_vector(&proj, &p);
        let raw = multiply_mv(&proj, &p);

        // w = -z for this projection
        assert_relative_eq!(t.x, raw.x / 2.0, epsilon = 1e-12);
        assert_relative_eq!(t.y, raw.y / 2.0, epsilon = 1e-12);
        assert_eq!(t.z, raw.z);
        // 45° half-field: focal length 1
        assert_relative_eq!(t.x, 0.25, epsilon = 1e-12);
    }
}
