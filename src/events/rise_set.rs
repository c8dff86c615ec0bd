use std::fmt;

use hifitime::{Epoch, Unit};
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, UtHours, DEG_PER_HOUR, HOURS_PER_DAY, RADEG};
use crate::coordinates::lat_long::LatLong;
use crate::params::SkyParams;
use crate::planet::Planet;
use crate::time::{epoch_at_ut, mean_sidereal_time, start_of_utc_day};

/// Value reported by [`RiseSetSolution::ut_or_sentinel`] when there is no event
pub const NO_EVENT: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiseSetIndicator {
    Rise,
    Set,
}

impl RiseSetIndicator {
    /// +1 for a rise (body east of the meridian), −1 for a set.
    fn sign(&self) -> f64 {
        match self {
            RiseSetIndicator::Rise => 1.0,
            RiseSetIndicator::Set => -1.0,
        }
    }
}

impl fmt::Display for RiseSetIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiseSetIndicator::Rise => f.write_str("rise"),
            RiseSetIndicator::Set => f.write_str("set"),
        }
    }
}

/// Result of the rise/set fixed-point search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetSolution {
    /// Hours of UT in [0, 24) within the UTC day that was searched
    pub ut: UtHours,
    pub iterations: usize,
    pub converged: bool,
}

impl RiseSetSolution {
    /// `ut` when converged, [`NO_EVENT`] otherwise.
    pub fn ut_or_sentinel(&self) -> f64 {
        if self.converged {
            self.ut
        } else {
            NO_EVENT
        }
    }
}

/// Hour angle of a body when it stands at `altitude`, in degrees [0, 180].
///
/// `cos H = (sin h − sin φ sin δ) / (cos φ cos δ)`
///
/// Arguments
/// ---------
/// * `altitude`: target altitude h (degrees)
/// * `latitude`: observer latitude φ (degrees)
/// * `declination`: body declination δ (degrees)
///
/// Return
/// ------
/// * `None` when the body never reaches that altitude (|cos H| > 1): it stays above
///   (circumpolar) or below the horizon all day
pub fn hour_angle(altitude: Degree, latitude: Degree, declination: Degree) -> Option<Degree> {
    let (alt, lat, dec) = (altitude * RADEG, latitude * RADEG, declination * RADEG);
    let cos_ha = (alt.sin() - lat.sin() * dec.sin()) / (lat.cos() * dec.cos());
    if cos_ha.is_finite() && cos_ha.abs() <= 1.0 {
        Some(cos_ha.acos() / RADEG)
    } else {
        None
    }
}

/// Reduce a correction in hours into (−12, 12].
fn normalize_correction(delta: f64) -> f64 {
    let reduced = delta.rem_euclid(HOURS_PER_DAY);
    if reduced > HOURS_PER_DAY / 2.0 {
        reduced - HOURS_PER_DAY
    } else {
        reduced
    }
}

/// Reduce a time of day into [0, 24).
fn normalize_ut(ut: UtHours) -> UtHours {
    let reduced = ut.rem_euclid(HOURS_PER_DAY);
    if reduced >= HOURS_PER_DAY {
        0.0
    } else {
        reduced
    }
}

/// UT of the rise or set of `planet` during the UTC day containing `epoch`.
///
/// Arguments
/// ---------
/// * `planet`: the body
/// * `epoch`: any instant of the UTC day to search
/// * `location`: observer
/// * `indicator`: rise or set
/// * `params`: tolerance, iteration cap and UT seed of the search
///
/// Return
/// ------
/// * a [`RiseSetSolution`]; `converged == false` when the body does not cross the
///   horizon or when the iteration cap is reached
///
/// Details
/// -------
/// Starting from `params.rise_set_seed_ut`, each step recomputes the body's
/// RA/Dec and the Greenwich mean sidereal time at the trial instant, and moves
/// the trial by the difference between the local hour angle `GST − α + λ` and the
/// target `∓H`, in hours. The search stops when that correction is at most
/// `params.rise_set_tolerance_hours`.
///
/// The hour-angle model degrades above about 60° of latitude, where the Moon and
/// the Sun can move in declination fast enough to miss or double an event.
pub fn calculate_rise_set_ut(
    planet: Planet,
    epoch: &Epoch,
    location: &LatLong,
    indicator: RiseSetIndicator,
    params: &SkyParams,
) -> RiseSetSolution {
    let day_start = start_of_utc_day(epoch);
    let sign = indicator.sign();
    let altitude = planet.rise_set_altitude();
    let mut ut = params.rise_set_seed_ut;

    for iteration in 1..=params.rise_set_max_iterations {
        let trial = epoch_at_ut(&day_start, ut);
        let ra_dec = planet.ra_dec(&trial, params);

        let gst = mean_sidereal_time(&trial, 0.0);
        let gha = gst - ra_dec.ra;

        let Some(ha) = hour_angle(altitude, location.latitude(), ra_dec.dec) else {
            tracing::debug!(
                %planet,
                %indicator,
                declination = ra_dec.dec,
                latitude = location.latitude(),
                "body does not cross the horizon"
            );
            return RiseSetSolution {
                ut,
                iterations: iteration,
                converged: false,
            };
        };

        let delta = normalize_correction((gha + location.longitude() + sign * ha) / DEG_PER_HOUR);
        ut = normalize_ut(ut - delta);

        if delta.abs() <= params.rise_set_tolerance_hours {
            return RiseSetSolution {
                ut,
                iterations: iteration,
                converged: true,
            };
        }
    }

    tracing::debug!(%planet, %indicator, "rise/set calculation did not converge");
    RiseSetSolution {
        ut,
        iterations: params.rise_set_max_iterations,
        converged: false,
    }
}

/// Next rise or set of `planet` at or after `now`.
///
/// The UT found for the current UTC day is turned into an instant; when that
/// instant is already past, it is moved one day forward.
///
/// Return
/// ------
/// * `None` when the body does not rise (or set) that day, or the search did not converge
pub fn next_rise_set_time(
    planet: Planet,
    now: &Epoch,
    location: &LatLong,
    indicator: RiseSetIndicator,
    params: &SkyParams,
) -> Option<Epoch> {
    let solution = calculate_rise_set_ut(planet, now, location, indicator, params);
    if !solution.converged {
        return None;
    }

    let event = epoch_at_ut(&start_of_utc_day(now), solution.ut);
    if event < *now {
        tracing::debug!(%planet, %indicator, "nearest event is in the past, adding one day");
        Some(event + Unit::Day * 1.0)
    } else {
        Some(event)
    }
}
