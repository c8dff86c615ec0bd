use std::marker::PhantomData;
use std::ops::{Neg, Sub};

use nalgebra::{Matrix3, Vector3};

use crate::constants::{AstronomicalUnit, Radian};
use crate::orbital_elements::OrbitalElements;
use crate::ref_system::{rotpn, Ecliptic, Equatorial, Frame};

/// Rectangular position of a body around the Sun, tagged with its reference frame.
///
/// The frame parameter `F` is either [`Ecliptic`] (built from orbital elements) or
/// [`Equatorial`] (after [`to_equatorial`](HeliocentricCoordinates::to_equatorial)).
/// Only ecliptic coordinates can be rotated, and arithmetic is only defined between
/// two values of the same frame, so a double rotation or a mixed-frame difference
/// does not compile.
///
/// `radius` is the length of the position vector in AU. It is kept alongside the
/// vector because the element-based constructor gets it for free from the orbit
/// equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricCoordinates<F: Frame> {
    position: Vector3<f64>,
    radius: AstronomicalUnit,
    frame: PhantomData<F>,
}

impl<F: Frame> HeliocentricCoordinates<F> {
    /// Wrap a position vector; the radius is its Euclidean norm.
    pub fn new(position: Vector3<f64>) -> Self {
        HeliocentricCoordinates {
            position,
            radius: position.norm(),
            frame: PhantomData,
        }
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    pub fn radius(&self) -> AstronomicalUnit {
        self.radius
    }

    /// Euclidean distance between two positions of the same frame, in AU.
    pub fn distance_from(&self, other: &Self) -> AstronomicalUnit {
        (self.position - other.position).norm()
    }

    /// Vector from `origin` to `self`, e.g. the Earth → planet vector.
    ///
    /// The radius of the result is the length of the difference.
    pub fn relative_to(&self, origin: &Self) -> Self {
        *self - *origin
    }
}

impl<F: Frame> Sub for HeliocentricCoordinates<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        HeliocentricCoordinates::new(self.position - rhs.position)
    }
}

impl<F: Frame> Neg for HeliocentricCoordinates<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        HeliocentricCoordinates {
            position: -self.position,
            radius: self.radius,
            frame: PhantomData,
        }
    }
}

impl HeliocentricCoordinates<Ecliptic> {
    /// Heliocentric ecliptic position of a body from its orbital elements.
    ///
    /// The true anomaly is solved with the default Kepler settings; use
    /// [`from_true_anomaly`](HeliocentricCoordinates::from_true_anomaly) to supply one
    /// computed with other settings.
    pub fn from_orbital_elements(elements: &OrbitalElements) -> Self {
        Self::from_true_anomaly(elements, elements.true_anomaly())
    }

    /// Heliocentric ecliptic position of a body at true anomaly `anomaly`.
    ///
    /// Arguments
    /// ---------
    /// * `elements`: orbital elements of the body
    /// * `anomaly`: true anomaly `v` (radians)
    ///
    /// Return
    /// ------
    /// * the position, with radius `r = a(1 − e²) / (1 + e·cos v)`
    ///
    /// Details
    /// -------
    /// With `u = v + ϖ − Ω` the argument of latitude:
    ///
    /// ```text
    /// x = r (cos Ω cos u − sin Ω sin u cos i)
    /// y = r (sin Ω cos u + cos Ω sin u cos i)
    /// z = r  sin u sin i
    /// ```
    pub fn from_true_anomaly(elements: &OrbitalElements, anomaly: Radian) -> Self {
        let ecc = elements.eccentricity;
        let radius = elements.distance * (1.0 - ecc * ecc) / (1.0 + ecc * anomaly.cos());

        let (sin_asc, cos_asc) = elements.ascending_node.sin_cos();
        let (sin_inc, cos_inc) = elements.inclination.sin_cos();
        let (sin_u, cos_u) = (anomaly + elements.perihelion - elements.ascending_node).sin_cos();

        let position = Vector3::new(
            radius * (cos_asc * cos_u - sin_asc * sin_u * cos_inc),
            radius * (sin_asc * cos_u + cos_asc * sin_u * cos_inc),
            radius * (sin_u * sin_inc),
        );

        HeliocentricCoordinates {
            position,
            radius,
            frame: PhantomData,
        }
    }

    /// Rotate into the equatorial J2000 frame by the fixed obliquity.
    pub fn to_equatorial(&self) -> HeliocentricCoordinates<Equatorial> {
        self.rotate(&rotpn(Ecliptic::SYSTEM, Equatorial::SYSTEM))
    }

    /// Same as [`to_equatorial`](HeliocentricCoordinates::to_equatorial) with a
    /// precomputed ecliptic → equatorial matrix.
    pub fn rotate(&self, rot_ecl_to_equ: &Matrix3<f64>) -> HeliocentricCoordinates<Equatorial> {
        HeliocentricCoordinates {
            position: rot_ecl_to_equ * self.position,
            radius: self.radius,
            frame: PhantomData,
        }
    }
}
