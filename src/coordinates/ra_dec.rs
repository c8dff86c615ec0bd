use std::fmt;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, DEGRAD};
use crate::coordinates::geocentric::GeocentricCoordinates;
use crate::coordinates::heliocentric::HeliocentricCoordinates;
use crate::coordinates::lat_long::LatLong;
use crate::geometry::mod2pi;
use crate::ref_system::Equatorial;
use crate::time::mean_sidereal_time;

/// Equatorial angular position, both angles in degrees.
///
/// * `ra`: right ascension in [0, 360)
/// * `dec`: declination in [−90, 90]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaDec {
    pub ra: Degree,
    pub dec: Degree,
}

impl RaDec {
    pub fn new(ra: Degree, dec: Degree) -> Self {
        RaDec { ra, dec }
    }

    /// Direction of an equatorial rectangular vector.
    ///
    /// The vector does not have to be normalized, but must not be zero.
    pub fn from_equatorial(coords: &HeliocentricCoordinates<Equatorial>) -> Self {
        let p = coords.position();
        let ra = mod2pi(p.y.atan2(p.x)) * DEGRAD;
        let dec = p.z.atan2(p.x.hypot(p.y)) * DEGRAD;
        RaDec { ra, dec }
    }

    pub fn from_geocentric(coords: &GeocentricCoordinates) -> Self {
        coords.to_ra_dec()
    }

    /// Point of the sky straight above `location` at `epoch`.
    ///
    /// Its right ascension is the local mean sidereal time and its declination the latitude.
    pub fn zenith(epoch: &Epoch, location: &LatLong) -> Self {
        RaDec {
            ra: mean_sidereal_time(epoch, location.longitude()),
            dec: location.latitude(),
        }
    }

    /// True when the body never sets as seen from `latitude`.
    pub fn is_circumpolar_for(&self, latitude: Degree) -> bool {
        if latitude > 0.0 {
            self.dec > 90.0 - latitude
        } else {
            self.dec < -90.0 - latitude
        }
    }

    /// True when the body never rises as seen from `latitude`.
    pub fn is_never_visible(&self, latitude: Degree) -> bool {
        if latitude > 0.0 {
            self.dec < latitude - 90.0
        } else {
            self.dec > 90.0 + latitude
        }
    }
}

impl fmt::Display for RaDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RA: {:.4}°, Dec: {:.4}°", self.ra, self.dec)
    }
}
