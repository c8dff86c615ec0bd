//! # Solver and cadence parameters
//!
//! This module defines the [`SkyParams`] configuration struct and its builder,
//! which tune the iterative parts of the engine:
//!
//! - the Newton iteration on Kepler's equation (`kepler_tolerance`, `kepler_max_iterations`),
//! - the rise/set fixed-point search (`rise_set_tolerance_hours`, `rise_set_max_iterations`,
//!   `rise_set_seed_ut`),
//! - the hour-by-hour full-moon search (`full_moon_step_hours`, `full_moon_horizon_days`),
//! - the refresh cadence of tracked satellites (`satellite_update_interval_seconds`).
//!
//! The defaults reproduce the behavior of the reference planetarium model, so
//! [`SkyParams::default()`] is the right choice unless a test wants to force a
//! solver into its non-convergence branch.
//!
//! ## Example
//!
//! ```rust
//! use skyward::params::SkyParams;
//!
//! let params = SkyParams::builder()
//!     .rise_set_tolerance_hours(0.001)
//!     .full_moon_horizon_days(35.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(params.rise_set_max_iterations, 25);
//! println!("{params:#}");
//! ```

use std::cmp::Ordering::{Equal, Greater, Less};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::HOURS_PER_DAY;
use crate::kepler::{KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE};
use crate::skyward_errors::SkywardError;

/// Tunable parameters of the ephemeris and event solvers.
///
/// Fields
/// -----------------
/// * `kepler_tolerance` – Stop the Kepler iteration once successive eccentric anomalies differ by at most this (rad).
/// * `kepler_max_iterations` – Newton step cap for Kepler's equation.
/// * `rise_set_tolerance_hours` – Rise/set search converges when the UT correction is at most this (h).
/// * `rise_set_max_iterations` – Rise/set iteration cap; past it the event is reported as absent.
/// * `rise_set_seed_ut` – Starting guess of the rise/set search, hours of UT in [0, 24].
/// * `full_moon_step_hours` – Step of the iterative full-moon search.
/// * `full_moon_horizon_days` – Give up the iterative full-moon search after this span.
/// * `satellite_update_interval_seconds` – Minimum age of a tracked satellite position before it is recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyParams {
    // Kepler
    pub kepler_tolerance: f64,
    pub kepler_max_iterations: usize,

    // Rise / set
    pub rise_set_tolerance_hours: f64,
    pub rise_set_max_iterations: usize,
    pub rise_set_seed_ut: f64,

    // Full moon
    pub full_moon_step_hours: f64,
    pub full_moon_horizon_days: f64,

    // Satellites
    pub satellite_update_interval_seconds: f64,
}

impl SkyParams {
    pub fn builder() -> SkyParamsBuilder {
        SkyParamsBuilder::new()
    }
}

impl Default for SkyParams {
    fn default() -> Self {
        SkyParams {
            kepler_tolerance: KEPLER_TOLERANCE,
            kepler_max_iterations: KEPLER_MAX_ITERATIONS,

            rise_set_tolerance_hours: 0.008,
            rise_set_max_iterations: 25,
            rise_set_seed_ut: 12.0,

            full_moon_step_hours: 1.0,
            full_moon_horizon_days: 40.0,

            satellite_update_interval_seconds: 1.0,
        }
    }
}

/// Builder for [`SkyParams`]; start from the defaults and override what is needed.
#[derive(Debug, Clone)]
pub struct SkyParamsBuilder {
    params: SkyParams,
}

impl Default for SkyParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SkyParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: SkyParams::default(),
        }
    }

    // --- Kepler ---
    pub fn kepler_tolerance(mut self, v: f64) -> Self {
        self.params.kepler_tolerance = v;
        self
    }
    pub fn kepler_max_iterations(mut self, v: usize) -> Self {
        self.params.kepler_max_iterations = v;
        self
    }

    // --- Rise / set ---
    pub fn rise_set_tolerance_hours(mut self, v: f64) -> Self {
        self.params.rise_set_tolerance_hours = v;
        self
    }
    pub fn rise_set_max_iterations(mut self, v: usize) -> Self {
        self.params.rise_set_max_iterations = v;
        self
    }
    pub fn rise_set_seed_ut(mut self, v: f64) -> Self {
        self.params.rise_set_seed_ut = v;
        self
    }

    // --- Full moon ---
    pub fn full_moon_step_hours(mut self, v: f64) -> Self {
        self.params.full_moon_step_hours = v;
        self
    }
    pub fn full_moon_horizon_days(mut self, v: f64) -> Self {
        self.params.full_moon_horizon_days = v;
        self
    }

    // --- Satellites ---
    pub fn satellite_update_interval_seconds(mut self, v: f64) -> Self {
        self.params.satellite_update_interval_seconds = v;
        self
    }

    /// Return true iff x > 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Return true iff x >= 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn ge0(x: f64) -> bool {
        matches!(x.partial_cmp(&0.0), Some(Greater) | Some(Equal))
    }

    /// Return true iff a <= b and comparable (i.e., not NaN).
    #[inline]
    fn le(a: f64, b: f64) -> bool {
        matches!(a.partial_cmp(&b), Some(Less) | Some(Equal))
    }

    /// Finalize the builder and produce a [`SkyParams`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * `kepler_tolerance > 0`, `rise_set_tolerance_hours > 0`
    /// * `kepler_max_iterations ≥ 1`, `rise_set_max_iterations ≥ 1`
    /// * `0 ≤ rise_set_seed_ut ≤ 24`
    /// * `0 < full_moon_step_hours ≤ 24 · full_moon_horizon_days`, both finite
    /// * `satellite_update_interval_seconds ≥ 0`
    ///
    /// NaN fails every check.
    ///
    /// Return
    /// ----------
    /// * the validated parameters, or [`SkywardError::InvalidParameter`] naming the first violated rule
    pub fn build(self) -> Result<SkyParams, SkywardError> {
        let p = &self.params;

        if !Self::gt0(p.kepler_tolerance) || !Self::gt0(p.rise_set_tolerance_hours) {
            return Err(SkywardError::InvalidParameter(
                "solver tolerances must be strictly positive".into(),
            ));
        }
        if p.kepler_max_iterations == 0 || p.rise_set_max_iterations == 0 {
            return Err(SkywardError::InvalidParameter(
                "iteration caps must be at least 1".into(),
            ));
        }
        if !(Self::ge0(p.rise_set_seed_ut) && Self::le(p.rise_set_seed_ut, HOURS_PER_DAY)) {
            return Err(SkywardError::InvalidParameter(
                "rise_set_seed_ut must lie in [0, 24] hours".into(),
            ));
        }
        let ok_step = Self::gt0(p.full_moon_step_hours) && p.full_moon_step_hours.is_finite();
        let ok_horizon = Self::gt0(p.full_moon_horizon_days) && p.full_moon_horizon_days.is_finite();
        let ok_order = Self::le(p.full_moon_step_hours, p.full_moon_horizon_days * HOURS_PER_DAY);
        if !(ok_step && ok_horizon && ok_order) {
            return Err(SkywardError::InvalidParameter(
                "require finite 0 < full_moon_step_hours <= 24 * full_moon_horizon_days".into(),
            ));
        }
        if !Self::ge0(p.satellite_update_interval_seconds) {
            return Err(SkywardError::InvalidParameter(
                "satellite_update_interval_seconds must be non-negative".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for SkyParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            const PARAM_COL: usize = 46; // width reserved for "name = value"
            writeln!(f, "Sky Parameters")?;
            writeln!(f, "--------------")?;

            macro_rules! line {
                ($fmt:expr, $val:expr, $comment:expr) => {{
                    let s = format!($fmt, $val);
                    let pad = if s.len() < PARAM_COL {
                        " ".repeat(PARAM_COL - s.len())
                    } else {
                        " ".to_string()
                    };
                    writeln!(f, "  {}{}# {}", s, pad, $comment)
                }};
            }

            writeln!(f, "[Kepler equation]")?;
            line!(
                "kepler_tolerance         = {:.1e}",
                self.kepler_tolerance,
                "Newton convergence threshold (rad)"
            )?;
            line!(
                "kepler_max_iterations    = {}",
                self.kepler_max_iterations,
                "Newton step cap"
            )?;

            writeln!(f, "\n[Rise / set]")?;
            line!(
                "rise_set_tolerance_hours = {:.4} h",
                self.rise_set_tolerance_hours,
                "Convergence on the UT correction"
            )?;
            line!(
                "rise_set_max_iterations  = {}",
                self.rise_set_max_iterations,
                "Cap before reporting no event"
            )?;
            line!(
                "rise_set_seed_ut         = {:.2} h",
                self.rise_set_seed_ut,
                "Initial UT guess"
            )?;

            writeln!(f, "\n[Full moon]")?;
            line!(
                "full_moon_step_hours     = {:.2} h",
                self.full_moon_step_hours,
                "Step of the iterative search"
            )?;
            line!(
                "full_moon_horizon_days   = {:.1} d",
                self.full_moon_horizon_days,
                "Search horizon"
            )?;

            writeln!(f, "\n[Satellites]")?;
            line!(
                "satellite_update_interval= {:.1} s",
                self.satellite_update_interval_seconds,
                "Minimum age before recomputation"
            )?;

            Ok(())
        } else {
            write!(
                f,
                "SkyParams(kepler_tol={:.1e}, kepler_max_it={}, rise_set_tol={:.4}h, rise_set_max_it={}, seed_ut={:.1}h, full_moon_step={:.1}h, horizon={:.0}d, sat_update={:.1}s)",
                self.kepler_tolerance,
                self.kepler_max_iterations,
                self.rise_set_tolerance_hours,
                self.rise_set_max_iterations,
                self.rise_set_seed_ut,
                self.full_moon_step_hours,
                self.full_moon_horizon_days,
                self.satellite_update_interval_seconds,
            )
        }
    }
}
