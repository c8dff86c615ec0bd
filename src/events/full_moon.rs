use hifitime::{Epoch, Unit};
use itertools::{iterate, Itertools};

use crate::constants::{HOURS_PER_DAY, SYNODIC_MONTH_DAYS};
use crate::params::SkyParams;
use crate::planet::Planet;

/// Next full moon after `now`, by linear projection over a mean synodic month.
///
/// Arguments
/// ---------
/// * `now`: UTC instant to search from
/// * `params`: solver settings (Kepler tolerance of the solar position)
///
/// Return
/// ------
/// * the projected instant of the next full moon
///
/// Details
/// -------
/// The elongation `φ` runs 0° → 180° while the Moon waxes and back to 0° while it
/// wanes; a second sample one hour later tells the two halves apart. The angle
/// still to travel before the next full moon is `180° − φ` when waxing and
/// `180° + φ` when waning, converted with 29.53 days per 360°.
///
/// This is a first-order estimate, good to about a day: the real motion of the
/// Moon is not uniform.
pub fn next_full_moon(now: &Epoch, params: &SkyParams) -> Epoch {
    let phase = Planet::Moon.phase_angle(now, params);
    let later = *now + Unit::Hour * 1.0;
    let waxing = Planet::Moon.phase_angle(&later, params) > phase;

    let remaining = if waxing { 180.0 - phase } else { 180.0 + phase };
    let days = remaining / 360.0 * SYNODIC_MONTH_DAYS;

    *now + Unit::Day * days
}

/// Next full moon after `now`, by stepping forward until the elongation peaks.
///
/// Starting at `now`, the elongation is sampled every `params.full_moon_step_hours`.
/// The full moon is the last sample before a decrease that follows an increase,
/// so the answer is accurate to one step.
///
/// Return
/// ------
/// * `None` when no maximum shows up within `params.full_moon_horizon_days`
pub fn next_full_moon_slow(now: &Epoch, params: &SkyParams) -> Option<Epoch> {
    let step_hours = params.full_moon_step_hours;
    let horizon_days = params.full_moon_horizon_days;
    // params may bypass the builder through serde
    if !(step_hours.is_finite() && step_hours > 0.0 && horizon_days.is_finite()) {
        tracing::warn!(step_hours, horizon_days, "unusable full-moon search settings");
        return None;
    }

    let step = Unit::Hour * step_hours;
    let max_steps = (horizon_days * HOURS_PER_DAY / step_hours).ceil().max(0.0) as usize;

    let samples = iterate(*now, |t| *t + step)
        .take(max_steps.saturating_add(1))
        .map(|t| (t, Planet::Moon.phase_angle(&t, params)));

    let mut waxing = false;
    for ((t0, phase), (_, next_phase)) in samples.tuple_windows() {
        if waxing && next_phase < phase {
            return Some(t0);
        }
        waxing = next_phase > phase;
    }

    tracing::warn!(
        horizon_days = params.full_moon_horizon_days,
        "no full moon found within the search horizon"
    );
    None
}
