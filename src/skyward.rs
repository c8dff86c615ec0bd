//! # Skyward: solver settings and frame rotations behind one handle
//!
//! This module defines the [`Skyward`](crate::skyward::Skyward) struct, the façade a
//! planetarium front-end talks to. It holds:
//!
//! 1. **Solver settings** ([`SkyParams`](crate::params::SkyParams)): Kepler and rise/set
//!    tolerances, iteration caps, the full-moon search horizon and the satellite refresh interval.
//! 2. **Frame rotations**: the J2000 ecliptic ↔ equatorial matrices, computed once.
//!
//! Every query is a pure function of its arguments and of these two immutable
//! pieces, so a single `Skyward` can be shared between threads.
//!
//! ## Typical usage
//!
//! ```rust
//! use hifitime::Epoch;
//! use skyward::coordinates::LatLong;
//! use skyward::events::rise_set::RiseSetIndicator;
//! use skyward::planet::Planet;
//! use skyward::skyward::Skyward;
//!
//! let sky = Skyward::default();
//! let now = Epoch::from_gregorian_utc(2024, 3, 20, 6, 0, 0, 0);
//! let paris = LatLong::new(48.85, 2.35);
//!
//! // where to draw Jupiter, and how bright
//! let jupiter = sky.geocentric_coordinates(Planet::Jupiter, &now);
//! let magnitude = sky.magnitude(Planet::Jupiter, &now);
//!
//! // when does the Sun set tonight
//! let sunset = sky.next_rise_set_time(Planet::Sun, &now, &paris, RiseSetIndicator::Set);
//! assert!(sunset.is_some());
//! ```
//!
//! ## See also
//! ------------
//! * [`Planet`](crate::planet::Planet) – Per-body tables and formulas.
//! * [`events`](crate::events) – Phase, full-moon and rise/set solvers.
//! * [`satellite`](crate::satellite) – Adapter for externally propagated satellites.

use hifitime::Epoch;
use nalgebra::Matrix3;

use crate::{
    constants::Degree,
    coordinates::{GeocentricCoordinates, HeliocentricCoordinates, LatLong, RaDec},
    events::{
        full_moon::{next_full_moon, next_full_moon_slow},
        phase::LunarPhase,
        rise_set::{calculate_rise_set_ut, next_rise_set_time, RiseSetIndicator, RiseSetSolution},
    },
    orbital_elements::OrbitalElements,
    params::SkyParams,
    planet::Planet,
    ref_system::{rotpn, Equatorial, RefSystem},
    satellite::{SatellitePropagator, TrackedSatellite},
    skyward_errors::SkywardError,
};

#[derive(Debug, Clone)]
pub struct Skyward {
    params: SkyParams,
    rot_equmj2000_to_eclmj2000: Matrix3<f64>,
    rot_eclmj2000_to_equmj2000: Matrix3<f64>,
}

impl Default for Skyward {
    fn default() -> Self {
        Skyward::new(SkyParams::default())
    }
}

impl Skyward {
    /// Construct a new [`Skyward`] context from validated parameters.
    ///
    /// See also
    /// ------------
    /// * [`SkyParams::builder`] – Build and validate custom settings.
    pub fn new(params: SkyParams) -> Self {
        Skyward {
            params,
            rot_equmj2000_to_eclmj2000: rotpn(RefSystem::Equm, RefSystem::Eclm),
            rot_eclmj2000_to_equmj2000: rotpn(RefSystem::Eclm, RefSystem::Equm),
        }
    }

    pub fn get_params(&self) -> &SkyParams {
        &self.params
    }

    /// Get the rotation matrix from equatorial J2000 to ecliptic J2000.
    pub fn get_rot_equmj2000_to_eclmj2000(&self) -> &Matrix3<f64> {
        &self.rot_equmj2000_to_eclmj2000
    }

    /// Get the rotation matrix from ecliptic J2000 to equatorial J2000.
    pub fn get_rot_eclmj2000_to_equmj2000(&self) -> &Matrix3<f64> {
        &self.rot_eclmj2000_to_equmj2000
    }

    // --- Positions ---

    pub fn orbital_elements(&self, planet: Planet, epoch: &Epoch) -> Option<OrbitalElements> {
        planet.orbital_elements(epoch)
    }

    /// Heliocentric position in the equatorial J2000 frame; `None` for the Moon.
    pub fn heliocentric_equatorial(
        &self,
        planet: Planet,
        epoch: &Epoch,
    ) -> Option<HeliocentricCoordinates<Equatorial>> {
        planet
            .heliocentric_coordinates(epoch, &self.params)
            .map(|coords| coords.rotate(&self.rot_eclmj2000_to_equmj2000))
    }

    pub fn ra_dec(&self, planet: Planet, epoch: &Epoch) -> RaDec {
        planet.ra_dec(epoch, &self.params)
    }

    pub fn geocentric_coordinates(&self, planet: Planet, epoch: &Epoch) -> GeocentricCoordinates {
        planet.geocentric_coordinates(epoch, &self.params)
    }

    /// Directions of every body, in draw order (farthest first).
    pub fn sky_positions(&self, epoch: &Epoch) -> Vec<(Planet, GeocentricCoordinates)> {
        Planet::ALL
            .iter()
            .map(|planet| (*planet, self.geocentric_coordinates(*planet, epoch)))
            .collect()
    }

    /// Point of the sky straight above `location`.
    pub fn ra_dec_of_zenith(&self, epoch: &Epoch, location: &LatLong) -> RaDec {
        RaDec::zenith(epoch, location)
    }

    // --- Photometry ---

    pub fn magnitude(&self, planet: Planet, epoch: &Epoch) -> f64 {
        planet.magnitude(epoch, &self.params)
    }

    pub fn phase_angle(&self, planet: Planet, epoch: &Epoch) -> Degree {
        planet.phase_angle(epoch, &self.params)
    }

    pub fn illuminated_percent(&self, planet: Planet, epoch: &Epoch) -> f64 {
        planet.illuminated_percent(epoch, &self.params)
    }

    // --- Events ---

    pub fn lunar_phase(&self, epoch: &Epoch) -> LunarPhase {
        LunarPhase::at(epoch, &self.params)
    }

    pub fn next_full_moon(&self, now: &Epoch) -> Epoch {
        next_full_moon(now, &self.params)
    }

    pub fn next_full_moon_slow(&self, now: &Epoch) -> Option<Epoch> {
        next_full_moon_slow(now, &self.params)
    }

    pub fn rise_set_ut(
        &self,
        planet: Planet,
        epoch: &Epoch,
        location: &LatLong,
        indicator: RiseSetIndicator,
    ) -> RiseSetSolution {
        calculate_rise_set_ut(planet, epoch, location, indicator, &self.params)
    }

    pub fn next_rise_set_time(
        &self,
        planet: Planet,
        now: &Epoch,
        location: &LatLong,
        indicator: RiseSetIndicator,
    ) -> Option<Epoch> {
        next_rise_set_time(planet, now, location, indicator, &self.params)
    }

    // --- Satellites ---

    /// Refresh a tracked satellite if its position is older than the configured interval.
    ///
    /// Return
    /// ----------
    /// * `Ok(true)` when recomputed, `Ok(false)` when still fresh, or the propagator error.
    pub fn update_satellite<P: SatellitePropagator>(
        &self,
        satellite: &mut TrackedSatellite<P::Descriptor>,
        propagator: &P,
        now: &Epoch,
        observer: &LatLong,
    ) -> Result<bool, SkywardError> {
        satellite.update(propagator, now, observer, &self.params)
    }
}

#[cfg(test)]
mod skyward_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotations_are_inverse() {
        let sky = Skyward::default();
        let product = sky.get_rot_eclmj2000_to_equmj2000() * sky.get_rot_equmj2000_to_eclmj2000();
        assert_relative_eq!(product, Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_heliocentric_equatorial_matches_to_equatorial() {
        let sky = Skyward::default();
        let epoch = Epoch::from_gregorian_utc(2024, 3, 20, 0, 0, 0, 0);
        let direct = Planet::Mars
            .heliocentric_coordinates(&epoch, sky.get_params())
            .unwrap()
            .to_equatorial();
        let via_sky = sky.heliocentric_equatorial(Planet::Mars, &epoch).unwrap();
        assert_relative_eq!(*via_sky.position(), *direct.position(), epsilon = 1e-15);
        assert!(sky.heliocentric_equatorial(Planet::Moon, &epoch).is_none());
    }

    #[test]
    fn test_sky_positions_in_draw_order() {
        let sky = Skyward::default();
        let epoch = Epoch::from_gregorian_utc(2024, 3, 20, 0, 0, 0, 0);
        let positions = sky.sky_positions(&epoch);
        assert_eq!(positions.len(), Planet::ALL.len());
        for ((planet, direction), expected) in positions.iter().zip(Planet::ALL) {
            assert_eq!(*planet, expected);
            assert_relative_eq!(direction.vector().norm(), 1.0, epsilon = 1e-12);
        }
    }
}
