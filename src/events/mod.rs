//! # Event solvers
//!
//! Derived sky events built on top of the planet catalog:
//!
//! - [`phase`]: lunar phase classification from the Sun–Moon elongation,
//! - [`full_moon`]: next full moon, closed form and hour-by-hour search,
//! - [`rise_set`]: rise and set times by fixed-point iteration on the hour angle.
//!
//! Every solver is bounded. Non-convergence and "no event in range" are reported
//! as values (`None`, `converged == false`), never as errors.

pub mod full_moon;
pub mod phase;
pub mod rise_set;
