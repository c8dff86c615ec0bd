use crate::constants::Radian;
use crate::geometry::mod2pi;

/// Convergence threshold on successive eccentric-anomaly estimates (radians)
pub const KEPLER_TOLERANCE: f64 = 1.0e-6;

/// Newton iteration cap for Kepler's equation
pub const KEPLER_MAX_ITERATIONS: usize = 100;

/// Outcome of the Newton iteration on Kepler's equation `E − e·sin(E) = M`.
///
/// The solver never fails: when the iteration cap is reached the last estimate is
/// returned with `converged == false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly (radians, not reduced)
    pub eccentric_anomaly: Radian,
    /// Number of Newton steps performed
    pub iterations: usize,
    /// False when the iteration cap was reached first
    pub converged: bool,
}

/// Solve Kepler's equation for the eccentric anomaly.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly M (radians), any range
/// * `eccentricity`: orbit eccentricity, `0 ≤ e < 1`
/// * `tolerance`: stop once two successive estimates differ by at most this amount
/// * `max_iterations`: Newton step cap
///
/// Return
/// ------
/// * a [`KeplerSolution`], flagged as not converged when the cap was exhausted
///
/// Details
/// -------
/// Starts from the second-order guess `E₀ = M + e·sin M·(1 + e·cos M)` and applies
/// `Eₙ₊₁ = Eₙ − (Eₙ − e·sin Eₙ − M) / (1 − e·cos Eₙ)`.
pub fn solve_kepler_equation(
    mean_anomaly: Radian,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: usize,
) -> KeplerSolution {
    debug_assert!(
        (0.0..1.0).contains(&eccentricity),
        "Kepler solver needs an elliptic orbit, got e = {eccentricity}"
    );

    let m = mean_anomaly;
    let e = eccentricity;
    let mut ecc_anomaly = m + e * m.sin() * (1.0 + e * m.cos());

    for iteration in 1..=max_iterations {
        let step = (ecc_anomaly - e * ecc_anomaly.sin() - m) / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= step;
        if step.abs() <= tolerance {
            return KeplerSolution {
                eccentric_anomaly: ecc_anomaly,
                iterations: iteration,
                converged: true,
            };
        }
    }

    tracing::debug!(
        mean_anomaly = m,
        eccentricity = e,
        estimate = ecc_anomaly,
        "Kepler equation did not converge, keeping last estimate"
    );
    KeplerSolution {
        eccentric_anomaly: ecc_anomaly,
        iterations: max_iterations,
        converged: false,
    }
}

/// Convert an eccentric anomaly into a true anomaly in [0, 2π).
///
/// `v = 2·atan( √((1+e)/(1−e)) · tan(E/2) )`
pub fn eccentric_to_true_anomaly(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let e = eccentricity;
    let v = 2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (0.5 * eccentric_anomaly).tan()).atan();
    mod2pi(v)
}
