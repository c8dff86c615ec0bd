use hifitime::{Epoch, TimeScale, Unit};
use std::str::FromStr;

use crate::constants::{
    Degree, JulianDay, UtHours, DAYS_PER_JULIAN_CENTURY, JD_J2000, RADEG,
};
use crate::skyward_errors::SkywardError;

/// Julian Date of a UTC instant.
///
/// Argument
/// --------
/// * `epoch`: the instant, interpreted in the UTC time scale
///
/// Return
/// ------
/// * the Julian Date (days), fractional part counted from noon
pub fn julian_day(epoch: &Epoch) -> JulianDay {
    epoch.to_jde_utc_days()
}

/// Number of Julian centuries elapsed since J2000.0 (negative before 2000-01-01 12:00).
///
/// This is the time argument of every low-precision series of the catalog.
pub fn julian_centuries(epoch: &Epoch) -> f64 {
    (julian_day(epoch) - JD_J2000) / DAYS_PER_JULIAN_CENTURY
}

/// Local mean sidereal time, in degrees within [0, 360).
///
/// # Arguments
/// * `epoch` - UTC instant
/// * `longitude` - observer longitude in degrees, east positive (0 gives Greenwich time)
///
/// # Details
/// Uses the linear expression `GMST = 280.461° + 360.98564737° · (JD − 2451545.0)`,
/// which is accurate to a fraction of a second of time over the validity range
/// of the planetary series.
pub fn mean_sidereal_time(epoch: &Epoch, longitude: Degree) -> Degree {
    let delta = julian_day(epoch) - JD_J2000;
    let gst = 280.461 + 360.98564737 * delta;
    normalize_degrees(gst + longitude)
}

/// Same as [`mean_sidereal_time`] but in radians.
pub fn mean_sidereal_angle(epoch: &Epoch, longitude: Degree) -> f64 {
    mean_sidereal_time(epoch, longitude) * RADEG
}

/// Reduce an angle in degrees to [0, 360).
pub fn normalize_degrees(angle: Degree) -> Degree {
    let reduced = angle.rem_euclid(360.0);
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

/// Parse an ISO-like date string (anything `hifitime` accepts, e.g. `2024-03-20T06:00:00 UTC`).
///
/// Return
/// ------
/// * the parsed [`Epoch`] or a [`SkywardError::EpochParseError`]
pub fn parse_epoch(date: &str) -> Result<Epoch, SkywardError> {
    Ok(Epoch::from_str(date)?)
}

/// Transformation from date in the format `YYYY MM DD.FFFFF` (UTC) to an [`Epoch`].
///
/// Argument
/// --------
/// * `date_str`: a string representing the date in the format YYYY MM DD.FFFFF in the UTC frame
///
/// Return
/// ------
/// * the corresponding UTC epoch, or [`SkywardError::InvalidEpoch`] when a field is malformed
pub fn frac_date_to_epoch(date_str: &str) -> Result<Epoch, SkywardError> {
    let parts: Vec<&str> = date_str.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(SkywardError::InvalidEpoch(format!(
            "expected YYYY MM DD.FFFFF, got '{date_str}'"
        )));
    }

    let year = i32::from_str(parts[0])
        .map_err(|_| SkywardError::InvalidEpoch(format!("invalid year '{}'", parts[0])))?;
    let month = u8::from_str(parts[1])
        .map_err(|_| SkywardError::InvalidEpoch(format!("invalid month '{}'", parts[1])))?;
    let day_fraction = f64::from_str(parts[2])
        .map_err(|_| SkywardError::InvalidEpoch(format!("invalid day '{}'", parts[2])))?;

    if !(1..=12).contains(&month) || !(1.0..32.0).contains(&day_fraction) {
        return Err(SkywardError::InvalidEpoch(format!(
            "date out of range '{date_str}'"
        )));
    }

    let day = day_fraction.trunc() as u8;
    let midnight = Epoch::maybe_from_gregorian(year, month, day, 0, 0, 0, 0, TimeScale::UTC)
        .map_err(|e| SkywardError::InvalidEpoch(format!("{date_str}: {e}")))?;

    Ok(midnight + Unit::Day * day_fraction.fract())
}

/// Midnight UTC at the start of the calendar day containing `epoch`.
pub fn start_of_utc_day(epoch: &Epoch) -> Epoch {
    let (year, month, day, _, _, _, _) = epoch.to_gregorian_utc();
    Epoch::from_gregorian_utc_at_midnight(year, month, day)
}

/// Instant reached `ut` hours after `day_start`.
pub fn epoch_at_ut(day_start: &Epoch, ut: UtHours) -> Epoch {
    *day_start + Unit::Hour * ut
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_julian_day_at_j2000() {
        let epoch = Epoch::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0);
        assert_abs_diff_eq!(julian_day(&epoch), JD_J2000, epsilon = 1e-8);
        assert_abs_diff_eq!(julian_centuries(&epoch), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_julian_day_midnight() {
        let epoch = Epoch::from_gregorian_utc_at_midnight(2021, 1, 1);
        assert_abs_diff_eq!(julian_day(&epoch), 2459215.5, epsilon = 1e-8);
    }

    #[test]
    fn test_julian_centuries_one_century() {
        let epoch = Epoch::from_gregorian_utc(2100, 1, 1, 12, 0, 0, 0);
        // 2000-01-01 to 2100-01-01 spans 36525 days (2000 is a leap year, 2100 is not)
        assert_abs_diff_eq!(julian_centuries(&epoch), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mean_sidereal_time() {
        let epoch = Epoch::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0);
        assert_abs_diff_eq!(mean_sidereal_time(&epoch, 0.0), 280.461, epsilon = 1e-5);
        assert_abs_diff_eq!(mean_sidereal_time(&epoch, 90.0), 10.461, epsilon = 1e-5);

        let gst = mean_sidereal_time(&Epoch::from_gregorian_utc(2024, 3, 20, 6, 0, 0, 0), -75.0);
        assert!((0.0..360.0).contains(&gst));
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
    }

    #[test]
    fn test_frac_date_to_epoch() {
        let epoch = frac_date_to_epoch("2021 1 1.5").unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_utc(2021, 1, 1, 12, 0, 0, 0));

        let epoch = frac_date_to_epoch("2024 03 20.25").unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_utc(2024, 3, 20, 6, 0, 0, 0));

        assert!(matches!(
            frac_date_to_epoch("2021 1"),
            Err(SkywardError::InvalidEpoch(_))
        ));
        assert!(matches!(
            frac_date_to_epoch("2021 13 1.0"),
            Err(SkywardError::InvalidEpoch(_))
        ));
        // day within 1..32 but not in the calendar
        assert!(matches!(
            frac_date_to_epoch("2021 02 30.5"),
            Err(SkywardError::InvalidEpoch(_))
        ));
        assert!(matches!(
            frac_date_to_epoch("2023 04 31.0"),
            Err(SkywardError::InvalidEpoch(_))
        ));
        assert!(matches!(
            frac_date_to_epoch("year 1 1.0"),
            Err(SkywardError::InvalidEpoch(_))
        ));
    }

    #[test]
    fn test_parse_epoch() {
        let epoch = parse_epoch("2024-03-20T06:00:00 UTC").unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_utc(2024, 3, 20, 6, 0, 0, 0));
        assert!(parse_epoch("not a date").is_err());
    }

    #[test]
    fn test_start_of_utc_day() {
        let epoch = Epoch::from_gregorian_utc(2024, 3, 20, 17, 42, 9, 0);
        let start = start_of_utc_day(&epoch);
        assert_eq!(start, Epoch::from_gregorian_utc_at_midnight(2024, 3, 20));
        assert_eq!(
            epoch_at_ut(&start, 6.5),
            Epoch::from_gregorian_utc(2024, 3, 20, 6, 30, 0, 0)
        );
    }
}
