//! # Coordinate types of the ephemeris pipeline
//!
//! Positions flow through the engine in this order:
//!
//! 1. [`HeliocentricCoordinates<Ecliptic>`](heliocentric::HeliocentricCoordinates):
//!    rectangular position around the Sun, straight out of the orbital elements,
//! 2. [`HeliocentricCoordinates<Equatorial>`](heliocentric::HeliocentricCoordinates):
//!    the same vector after the J2000 obliquity rotation,
//! 3. [`RaDec`](ra_dec::RaDec): right ascension / declination in degrees,
//! 4. [`GeocentricCoordinates`](geocentric::GeocentricCoordinates): the unit
//!    direction handed to the renderer.
//!
//! [`LatLong`](lat_long::LatLong) is the observer's ground location. All types
//! are small `Copy` values recomputed per query.

pub mod geocentric;
pub mod heliocentric;
pub mod lat_long;
pub mod ra_dec;

pub use geocentric::GeocentricCoordinates;
pub use heliocentric::HeliocentricCoordinates;
pub use lat_long::LatLong;
pub use ra_dec::RaDec;
