mod common;

use hifitime::Epoch;
use skyward::coordinates::LatLong;
use skyward::events::rise_set::{calculate_rise_set_ut, RiseSetIndicator, NO_EVENT};
use skyward::params::SkyParams;
use skyward::planet::Planet;
use skyward::skyward::Skyward;
use skyward::time::mean_sidereal_time;

fn equinox_2024() -> Epoch {
    Epoch::from_gregorian_utc(2024, 3, 20, 0, 0, 0, 0)
}

#[test]
fn test_equinox_sun_on_the_equator() {
    let params = SkyParams::default();
    let origin = LatLong::new(0.0, 0.0);

    let rise = calculate_rise_set_ut(
        Planet::Sun,
        &equinox_2024(),
        &origin,
        RiseSetIndicator::Rise,
        &params,
    );
    let set = calculate_rise_set_ut(
        Planet::Sun,
        &equinox_2024(),
        &origin,
        RiseSetIndicator::Set,
        &params,
    );
    assert!(rise.converged && set.converged);
    assert!((5.7..=6.5).contains(&rise.ut), "rise = {}", rise.ut);
    assert!((17.7..=18.5).contains(&set.ut), "set = {}", set.ut);
    assert!(rise.iterations <= params.rise_set_max_iterations);
}

#[test]
fn test_rise_satisfies_hour_angle() {
    let params = SkyParams::default();
    let origin = LatLong::new(0.0, 0.0);
    let rise = calculate_rise_set_ut(
        Planet::Sun,
        &equinox_2024(),
        &origin,
        RiseSetIndicator::Rise,
        &params,
    );
    let at_rise = skyward::time::epoch_at_ut(&equinox_2024(), rise.ut);
    let sun = Planet::Sun.ra_dec(&at_rise, &params);

    // local hour angle of the rising Sun is close to −90°
    let lha = (mean_sidereal_time(&at_rise, 0.0) - sun.ra).rem_euclid(360.0);
    let lha = if lha > 180.0 { lha - 360.0 } else { lha };
    let ha = skyward::events::rise_set::hour_angle(
        Planet::Sun.rise_set_altitude(),
        0.0,
        sun.dec,
    )
    .unwrap();
    assert!((lha.abs() - ha).abs() < 0.15, "lha = {lha}, ha = {ha}");
    assert!(lha < 0.0);
}

#[test]
fn test_next_sunset_is_in_the_future() {
    let sky = Skyward::default();
    let paris = LatLong::new(48.85, 2.35);
    let now = Epoch::from_gregorian_utc(2024, 3, 20, 20, 0, 0, 0);

    let sunset = sky
        .next_rise_set_time(Planet::Sun, &now, &paris, RiseSetIndicator::Set)
        .unwrap();
    assert!(sunset > now);
    // today's sunset was around 18:00 UTC, so the answer is tomorrow's
    assert!(common::days_between(&sunset, &now) < 1.0);
}

#[test]
fn test_polar_night_reports_sentinel() {
    let sky = Skyward::default();
    let svalbard = LatLong::new(78.22, 15.65);
    let winter = Epoch::from_gregorian_utc(2024, 12, 21, 0, 0, 0, 0);
    let rise = sky.rise_set_ut(Planet::Sun, &winter, &svalbard, RiseSetIndicator::Rise);
    assert!(!rise.converged);
    assert_eq!(rise.ut_or_sentinel(), NO_EVENT);
}
