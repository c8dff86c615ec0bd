//! # Constants and type definitions for Skyward
//!
//! This module centralizes the **astronomical constants**, **conversion factors**, and
//! **type aliases** shared by the ephemeris engine.
//!
//! ## Overview
//!
//! - Angle conversions (degrees ↔ radians, hours ↔ degrees)
//! - Julian-date reference values (J2000.0, days per Julian century)
//! - The fixed J2000 obliquity of the ecliptic used by the low-precision model
//! - Lunar cycle length and apparent-disk altitude used by the event solvers
//!
//! The planetary coefficient tables live next to the [`Planet`](crate::planet::Planet)
//! enumeration, not here.

// -------------------------------------------------------------------------------------------------
// Angles
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

/// Degrees of right ascension per hour of time
pub const DEG_PER_HOUR: f64 = 15.0;

/// Obliquity of the ecliptic at J2000 (23.439281°), in radians
pub const OBLIQUITY_J2000: f64 = 23.439281 * RADEG;

// -------------------------------------------------------------------------------------------------
// Time
// -------------------------------------------------------------------------------------------------

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00)
pub const JD_J2000: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Mean synodic month (new moon to new moon), in days
pub const SYNODIC_MONTH_DAYS: f64 = 29.53;

/// Hours in a solar day
pub const HOURS_PER_DAY: f64 = 24.0;

// -------------------------------------------------------------------------------------------------
// Photometry / rise-set geometry
// -------------------------------------------------------------------------------------------------

/// Altitude (degrees) of the upper limb at rise/set for the Sun and Moon,
/// accounting for apparent radius and standard refraction.
pub const DISK_RISE_SET_ALTITUDE: f64 = -0.83;

/// Fixed apparent magnitude reported for the Sun
pub const SUN_MAGNITUDE: f64 = -27.0;

/// Fixed apparent magnitude reported for the Moon
pub const MOON_MAGNITUDE: f64 = -10.0;

/// Mean Earth equatorial radius in kilometers, used for satellite slant ranges
pub const EARTH_RADIUS_KM: f64 = 6_378.135;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Hours of Universal Time within a day
pub type UtHours = f64;
/// Julian Date (days)
pub type JulianDay = f64;
