//! # Earth-orbiting objects
//!
//! Satellites are not propagated here. Deriving a state from two-line elements
//! and integrating it is the job of an external [`SatellitePropagator`]; this
//! module only consumes its answers:
//!
//! - the geocentric direction handed to the renderer,
//! - a display magnitude from the observer–satellite slant range,
//! - a caller-owned [`TrackedSatellite`] slot that is refreshed at most once per
//!   configured interval,
//! - a sampled ground track over a time span.

use hifitime::{Duration, Epoch, Unit};

use crate::constants::{Kilometer, EARTH_RADIUS_KM, RADEG};
use crate::coordinates::geocentric::GeocentricCoordinates;
use crate::coordinates::lat_long::LatLong;
use crate::coordinates::ra_dec::RaDec;
use crate::params::SkyParams;
use crate::skyward_errors::SkywardError;

/// Snapshot of a satellite as computed by a propagator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatellitePosition {
    /// Geocentric equatorial direction
    pub ra_dec: RaDec,
    /// Point of the Earth's surface directly below the satellite
    pub sub_point: LatLong,
    /// Height above the surface
    pub altitude_km: Kilometer,
}

/// Black-box orbit propagator for Earth-orbiting objects.
///
/// `Descriptor` is whatever the implementation derived from its orbital data
/// (typically parsed two-line elements); it is opaque to this crate.
pub trait SatellitePropagator {
    type Descriptor;

    /// Position of the object described by `descriptor` at `epoch`.
    ///
    /// Errors
    /// ------
    /// * [`SkywardError::SatelliteUnavailable`] when the propagation fails
    fn position_at(
        &self,
        descriptor: &Self::Descriptor,
        epoch: &Epoch,
    ) -> Result<SatellitePosition, SkywardError>;
}

/// Distance from the observer to the satellite, on a spherical Earth.
///
/// The central angle θ between the observer and the sub-satellite point gives
/// `d² = R² + (R + h)² − 2R(R + h)·cos θ`.
pub fn slant_range_km(observer: &LatLong, position: &SatellitePosition) -> Kilometer {
    let theta = observer.distance_from(&position.sub_point) * RADEG;
    let r_earth = EARTH_RADIUS_KM;
    let r_sat = EARTH_RADIUS_KM + position.altitude_km;
    (r_earth * r_earth + r_sat * r_sat - 2.0 * r_earth * r_sat * theta.cos()).sqrt()
}

/// Display magnitude at a given range, rounded to 0.1: `−1.3 + 5·log10(d / 1000 km)`.
pub fn satellite_magnitude(range_km: Kilometer) -> f64 {
    let mag = -1.3 + 5.0 * (range_km / 1000.0).log10();
    (mag * 10.0).round() / 10.0
}

/// Directions of the object at `samples` instants evenly spread over `span` from `start`.
pub fn ground_track<P: SatellitePropagator>(
    propagator: &P,
    descriptor: &P::Descriptor,
    start: &Epoch,
    span: Duration,
    samples: usize,
) -> Result<Vec<GeocentricCoordinates>, SkywardError> {
    let step = span.to_seconds() / samples.max(1) as f64;
    (0..samples)
        .map(|i| {
            let t = *start + Unit::Second * (step * i as f64);
            propagator
                .position_at(descriptor, &t)
                .map(|pos| pos.ra_dec.into())
        })
        .collect()
}

/// A satellite followed over time, owned by the caller.
///
/// [`update`](TrackedSatellite::update) recomputes the position only when it is
/// older than `params.satellite_update_interval_seconds`.
#[derive(Debug, Clone)]
pub struct TrackedSatellite<D> {
    name: String,
    descriptor: D,
    direction: Option<GeocentricCoordinates>,
    magnitude: Option<f64>,
    last_update: Option<Epoch>,
}

impl<D> TrackedSatellite<D> {
    pub fn new(name: impl Into<String>, descriptor: D) -> Self {
        TrackedSatellite {
            name: name.into(),
            descriptor,
            direction: None,
            magnitude: None,
            last_update: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &D {
        &self.descriptor
    }

    /// Last computed direction, `None` before the first update.
    pub fn direction(&self) -> Option<GeocentricCoordinates> {
        self.direction
    }

    pub fn magnitude(&self) -> Option<f64> {
        self.magnitude
    }

    pub fn last_update(&self) -> Option<Epoch> {
        self.last_update
    }

    /// Refresh the slot if its position is stale.
    ///
    /// Arguments
    /// ---------
    /// * `propagator`: source of positions
    /// * `now`: current time
    /// * `observer`: location used for the slant range and magnitude
    /// * `params`: refresh interval
    ///
    /// Return
    /// ------
    /// * `Ok(true)` when the position was recomputed, `Ok(false)` when still fresh
    /// * the propagator error otherwise; the previous position is kept
    pub fn update<P>(
        &mut self,
        propagator: &P,
        now: &Epoch,
        observer: &LatLong,
        params: &SkyParams,
    ) -> Result<bool, SkywardError>
    where
        P: SatellitePropagator<Descriptor = D>,
    {
        let interval = Unit::Second * params.satellite_update_interval_seconds;
        if let Some(last) = self.last_update {
            if (*now - last).abs() <= interval {
                return Ok(false);
            }
        }

        let position = propagator.position_at(&self.descriptor, now)?;
        let range = slant_range_km(observer, &position);

        self.direction = Some(position.ra_dec.into());
        self.magnitude = Some(satellite_magnitude(range));
        self.last_update = Some(*now);
        Ok(true)
    }
}

#[cfg(test)]
mod satellite_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_slant_range_overhead_and_offset() {
        let observer = LatLong::new(10.0, 20.0);
        let overhead = SatellitePosition {
            ra_dec: RaDec::new(0.0, 0.0),
            sub_point: observer,
            altitude_km: 420.0,
        };
        assert_abs_diff_eq!(slant_range_km(&observer, &overhead), 420.0, epsilon = 1e-3);

        // 90° away on the surface: Pythagoras with the two radii
        let far = SatellitePosition {
            sub_point: LatLong::new(10.0, 110.0),
            ..overhead
        };
        let equator_obs = LatLong::new(0.0, 20.0);
        let far_eq = SatellitePosition {
            sub_point: LatLong::new(0.0, 110.0),
            ..overhead
        };
        let r_sat = EARTH_RADIUS_KM + 420.0;
        assert_abs_diff_eq!(
            slant_range_km(&equator_obs, &far_eq),
            (EARTH_RADIUS_KM.powi(2) + r_sat.powi(2)).sqrt(),
            epsilon = 1e-6
        );
        assert!(slant_range_km(&observer, &far) > 420.0);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(satellite_magnitude(1000.0), -1.3);
        assert_eq!(satellite_magnitude(400.0), -3.3);
        assert_eq!(satellite_magnitude(10_000.0), 3.7);
    }
}
