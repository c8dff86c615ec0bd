use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Radian, DEGRAD};
use crate::kepler::{
    eccentric_to_true_anomaly, solve_kepler_equation, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE,
};

/// Keplerian orbital elements of a body around the Sun, at a given instant.
///
/// Units:
/// * `distance`: AU (mean distance, i.e. semi-major axis)
/// * `eccentricity`: unitless, `0 ≤ e < 1` for every modeled body
/// * `inclination`: radians
/// * `ascending_node`: radians (longitude of the ascending node)
/// * `perihelion`: radians (longitude of perihelion, ϖ = Ω + ω)
/// * `mean_longitude`: radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub distance: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node: Radian,
    pub perihelion: Radian,
    pub mean_longitude: Radian,
}

/// True anomaly together with the convergence report of the underlying Kepler solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrueAnomaly {
    /// True anomaly in [0, 2π)
    pub value: Radian,
    /// Newton steps of the Kepler solve
    pub iterations: usize,
    /// False when the Kepler solve hit its iteration cap
    pub converged: bool,
}

impl OrbitalElements {
    pub fn new(
        distance: AstronomicalUnit,
        eccentricity: f64,
        inclination: Radian,
        ascending_node: Radian,
        perihelion: Radian,
        mean_longitude: Radian,
    ) -> Self {
        OrbitalElements {
            distance,
            eccentricity,
            inclination,
            ascending_node,
            perihelion,
            mean_longitude,
        }
    }

    /// Mean anomaly `M = L − ϖ`, not reduced.
    pub fn mean_anomaly(&self) -> Radian {
        self.mean_longitude - self.perihelion
    }

    /// True anomaly with the default solver settings (tolerance 1e-6 rad, 100 iterations).
    ///
    /// When the solver hits its cap the last estimate is used; see [`OrbitalElements::solve_anomaly`]
    /// to inspect convergence.
    pub fn true_anomaly(&self) -> Radian {
        self.solve_anomaly(KEPLER_TOLERANCE, KEPLER_MAX_ITERATIONS)
            .value
    }

    /// Compute the true anomaly of the body.
    ///
    /// Arguments
    /// ---------
    /// * `tolerance`: convergence threshold of the Newton iteration (radians)
    /// * `max_iterations`: Newton step cap
    ///
    /// Return
    /// ------
    /// * the [`TrueAnomaly`] in [0, 2π) and how the Kepler solve went
    pub fn solve_anomaly(&self, tolerance: f64, max_iterations: usize) -> TrueAnomaly {
        let solution = solve_kepler_equation(
            self.mean_anomaly(),
            self.eccentricity,
            tolerance,
            max_iterations,
        );
        TrueAnomaly {
            value: eccentric_to_true_anomaly(solution.eccentric_anomaly, self.eccentricity),
            iterations: solution.iterations,
            converged: solution.converged,
        }
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital Elements (ecliptic J2000)")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (mean distance)         = {:.6} AU",
            self.distance
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination * DEGRAD
        )?;
        writeln!(
            f,
            "  Ω   (ascending node)        = {:.6} rad ({:.6}°)",
            self.ascending_node,
            self.ascending_node * DEGRAD
        )?;
        writeln!(
            f,
            "  ϖ   (perihelion longitude)  = {:.6} rad ({:.6}°)",
            self.perihelion,
            self.perihelion * DEGRAD
        )?;
        write!(
            f,
            "  L   (mean longitude)        = {:.6} rad ({:.6}°)",
            self.mean_longitude,
            self.mean_longitude * DEGRAD
        )
    }
}
