//! # Planet catalog
//!
//! The [`Planet`] enumeration covers the nine bodies of the model: the Sun, the
//! Moon and the planets Mercury to Pluto. Each body carries:
//!
//! - a refresh cadence, advisory for callers animating a sky view,
//! - a table of linear element rates (Moon excepted) evaluated at Julian
//!   centuries since J2000, from JPL's *Approximate Positions of the Planets*
//!   (valid 1800–2050),
//! - a magnitude formula in the phase angle,
//! - a phase-angle computation.
//!
//! The `Sun` entry holds **Earth's** heliocentric orbit: it is the baseline every
//! geocentric vector is measured from, and the Sun's own geocentric position is
//! its negation.
//!
//! Every per-body dispatch is an exhaustive `match`, so adding a variant without
//! filling each table is a compile error.

use std::fmt;
use std::str::FromStr;

use hifitime::{Duration, Epoch, Unit};
use serde::{Deserialize, Serialize};

use crate::constants::{
    AstronomicalUnit, Degree, DISK_RISE_SET_ALTITUDE, MOON_MAGNITUDE, RADEG, SUN_MAGNITUDE,
};
use crate::coordinates::geocentric::GeocentricCoordinates;
use crate::coordinates::heliocentric::HeliocentricCoordinates;
use crate::coordinates::ra_dec::RaDec;
use crate::geometry::mod2pi;
use crate::lunar::lunar_geocentric_location;
use crate::orbital_elements::OrbitalElements;
use crate::params::SkyParams;
use crate::ref_system::Ecliptic;
use crate::skyward_errors::SkywardError;
use crate::time::julian_centuries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Pluto,
    Neptune,
    Uranus,
    Jupiter,
    Saturn,
    Mars,
    Sun,
    Mercury,
    Venus,
    Moon,
}

/// `value + rate · T`, T in Julian centuries since J2000.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Linear {
    value: f64,
    rate: f64,
}

const fn lin(value: f64, rate: f64) -> Linear {
    Linear { value, rate }
}

impl Linear {
    fn at(&self, jc: f64) -> f64 {
        self.value + self.rate * jc
    }
}

/// Element rates of one body; angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ElementRates {
    distance: Linear,
    eccentricity: Linear,
    inclination: Linear,
    mean_longitude: Linear,
    perihelion: Linear,
    ascending_node: Linear,
}

impl ElementRates {
    fn at_centuries(&self, jc: f64) -> OrbitalElements {
        OrbitalElements::new(
            self.distance.at(jc),
            self.eccentricity.at(jc),
            self.inclination.at(jc) * RADEG,
            self.ascending_node.at(jc) * RADEG,
            self.perihelion.at(jc) * RADEG,
            mod2pi(self.mean_longitude.at(jc) * RADEG),
        )
    }
}

#[rustfmt::skip]
const MERCURY: ElementRates = ElementRates {
    distance:       lin(0.38709927,   0.00000037),
    eccentricity:   lin(0.20563593,   0.00001906),
    inclination:    lin(7.00497902,  -0.00594749),
    mean_longitude: lin(252.25032350, 149472.67411175),
    perihelion:     lin(77.45779628,  0.16047689),
    ascending_node: lin(48.33076593, -0.12534081),
};

#[rustfmt::skip]
const VENUS: ElementRates = ElementRates {
    distance:       lin(0.72333566,   0.00000390),
    eccentricity:   lin(0.00677672,  -0.00004107),
    inclination:    lin(3.39467605,  -0.00078890),
    mean_longitude: lin(181.97909950, 58517.81538729),
    perihelion:     lin(131.60246718, 0.00268329),
    ascending_node: lin(76.67984255, -0.27769418),
};

#[rustfmt::skip]
const EARTH: ElementRates = ElementRates {
    distance:       lin(1.00000261,   0.00000562),
    eccentricity:   lin(0.01671123,  -0.00004392),
    inclination:    lin(-0.00001531, -0.01294668),
    mean_longitude: lin(100.46457166, 35999.37244981),
    perihelion:     lin(102.93768193, 0.32327364),
    ascending_node: lin(0.0,          0.0),
};

#[rustfmt::skip]
const MARS: ElementRates = ElementRates {
    distance:       lin(1.52371034,   0.00001847),
    eccentricity:   lin(0.09339410,   0.00007882),
    inclination:    lin(1.84969142,  -0.00813131),
    mean_longitude: lin(-4.55343205,  19140.30268499),
    perihelion:     lin(-23.94362959, 0.44441088),
    ascending_node: lin(49.55953891, -0.29257343),
};

#[rustfmt::skip]
const JUPITER: ElementRates = ElementRates {
    distance:       lin(5.20288700,  -0.00011607),
    eccentricity:   lin(0.04838624,  -0.00013253),
    inclination:    lin(1.30439695,  -0.00183714),
    mean_longitude: lin(34.39644051,  3034.74612775),
    perihelion:     lin(14.72847983,  0.21252668),
    ascending_node: lin(100.47390909, 0.20469106),
};

#[rustfmt::skip]
const SATURN: ElementRates = ElementRates {
    distance:       lin(9.53667594,  -0.00125060),
    eccentricity:   lin(0.05386179,  -0.00050991),
    inclination:    lin(2.48599187,   0.00193609),
    mean_longitude: lin(49.95424423,  1222.49362201),
    perihelion:     lin(92.59887831, -0.41897216),
    ascending_node: lin(113.66242448, -0.28867794),
};

#[rustfmt::skip]
const URANUS: ElementRates = ElementRates {
    distance:       lin(19.18916464, -0.00196176),
    eccentricity:   lin(0.04725744,  -0.00004397),
    inclination:    lin(0.77263783,  -0.00242939),
    mean_longitude: lin(313.23810451, 428.48202785),
    perihelion:     lin(170.95427630, 0.40805281),
    ascending_node: lin(74.01692503,  0.04240589),
};

#[rustfmt::skip]
const NEPTUNE: ElementRates = ElementRates {
    distance:       lin(30.06992276,  0.00026291),
    eccentricity:   lin(0.00859048,   0.00005105),
    inclination:    lin(1.77004347,   0.00035372),
    mean_longitude: lin(-55.12002969, 218.45945325),
    perihelion:     lin(44.96476227, -0.32241464),
    ascending_node: lin(131.78422574, -0.00508664),
};

#[rustfmt::skip]
const PLUTO: ElementRates = ElementRates {
    distance:       lin(39.48211675, -0.00031596),
    eccentricity:   lin(0.24882730,   0.00005170),
    inclination:    lin(17.14001206,  0.00004818),
    mean_longitude: lin(238.92903833, 145.20780515),
    perihelion:     lin(224.06891629, -0.04062942),
    ascending_node: lin(110.30393684, -0.01183482),
};

/// Heliocentric ecliptic position of the Earth.
fn earth_coordinates(jc: f64, params: &SkyParams) -> HeliocentricCoordinates<Ecliptic> {
    heliocentric_from_rates(&EARTH, jc, params)
}

fn heliocentric_from_rates(
    rates: &ElementRates,
    jc: f64,
    params: &SkyParams,
) -> HeliocentricCoordinates<Ecliptic> {
    let elements = rates.at_centuries(jc);
    let anomaly = elements.solve_anomaly(params.kepler_tolerance, params.kepler_max_iterations);
    if !anomaly.converged {
        tracing::warn!(
            iterations = anomaly.iterations,
            "true anomaly did not converge, using last estimate"
        );
    }
    HeliocentricCoordinates::from_true_anomaly(&elements, anomaly.value)
}

impl Planet {
    /// All bodies in draw order, farthest first.
    pub const ALL: [Planet; 10] = [
        Planet::Pluto,
        Planet::Neptune,
        Planet::Uranus,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Mars,
        Planet::Sun,
        Planet::Mercury,
        Planet::Venus,
        Planet::Moon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Pluto => "Pluto",
            Planet::Neptune => "Neptune",
            Planet::Uranus => "Uranus",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Mars => "Mars",
            Planet::Sun => "Sun",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Moon => "Moon",
        }
    }

    /// How often a display should recompute this body's position.
    pub fn update_interval(&self) -> Duration {
        match self {
            Planet::Pluto | Planet::Neptune | Planet::Uranus | Planet::Jupiter | Planet::Saturn => {
                Unit::Week * 1.0
            }
            Planet::Mars | Planet::Sun | Planet::Mercury | Planet::Venus => Unit::Day * 1.0,
            Planet::Moon => Unit::Hour * 1.0,
        }
    }

    /// Altitude of the body at the instant of rise or set, in degrees.
    ///
    /// The Sun and the Moon rise when their upper limb, lifted by refraction,
    /// reaches the horizon; the others are point sources.
    pub fn rise_set_altitude(&self) -> Degree {
        match self {
            Planet::Sun | Planet::Moon => DISK_RISE_SET_ALTITUDE,
            Planet::Pluto
            | Planet::Neptune
            | Planet::Uranus
            | Planet::Jupiter
            | Planet::Saturn
            | Planet::Mars
            | Planet::Mercury
            | Planet::Venus => 0.0,
        }
    }

    fn element_rates(&self) -> Option<&'static ElementRates> {
        match self {
            Planet::Mercury => Some(&MERCURY),
            Planet::Venus => Some(&VENUS),
            Planet::Sun => Some(&EARTH),
            Planet::Mars => Some(&MARS),
            Planet::Jupiter => Some(&JUPITER),
            Planet::Saturn => Some(&SATURN),
            Planet::Uranus => Some(&URANUS),
            Planet::Neptune => Some(&NEPTUNE),
            Planet::Pluto => Some(&PLUTO),
            Planet::Moon => None,
        }
    }

    /// Orbital elements at `jc` Julian centuries since J2000.
    ///
    /// Return
    /// ------
    /// * `None` for the Moon, which is not modeled by an ellipse around the Sun
    pub fn orbital_elements_at_centuries(&self, jc: f64) -> Option<OrbitalElements> {
        self.element_rates().map(|rates| rates.at_centuries(jc))
    }

    /// Orbital elements at a UTC instant; `None` for the Moon.
    pub fn orbital_elements(&self, epoch: &Epoch) -> Option<OrbitalElements> {
        self.orbital_elements_at_centuries(julian_centuries(epoch))
    }

    /// Heliocentric ecliptic position; `None` for the Moon.
    ///
    /// For [`Planet::Sun`] this is the position of the Earth.
    pub fn heliocentric_coordinates(
        &self,
        epoch: &Epoch,
        params: &SkyParams,
    ) -> Option<HeliocentricCoordinates<Ecliptic>> {
        let jc = julian_centuries(epoch);
        self.element_rates()
            .map(|rates| heliocentric_from_rates(rates, jc, params))
    }

    /// Geocentric equatorial RA/Dec of the body.
    ///
    /// * Moon: lunar series,
    /// * Sun: opposite of the Earth's heliocentric vector,
    /// * others: planet − Earth,
    ///
    /// each rotated into the equatorial frame.
    pub fn ra_dec(&self, epoch: &Epoch, params: &SkyParams) -> RaDec {
        let Some(rates) = self.element_rates() else {
            return lunar_geocentric_location(epoch);
        };

        let jc = julian_centuries(epoch);
        let earth = earth_coordinates(jc, params);
        let geocentric = match self {
            Planet::Sun => -earth,
            _ => heliocentric_from_rates(rates, jc, params).relative_to(&earth),
        };
        RaDec::from_equatorial(&geocentric.to_equatorial())
    }

    /// Unit direction of the body as seen from the Earth's center.
    pub fn geocentric_coordinates(&self, epoch: &Epoch, params: &SkyParams) -> GeocentricCoordinates {
        self.ra_dec(epoch, params).into()
    }

    /// Phase angle of the body, in degrees [0, 180].
    ///
    /// * planets: Sun–body–Earth angle by the law of cosines,
    ///   `acos((Δ² + r² − R²) / (2Δr))`,
    /// * Moon: Sun–Moon elongation seen from the Earth (0° new, 180° full),
    /// * Sun: 0.
    pub fn phase_angle(&self, epoch: &Epoch, params: &SkyParams) -> Degree {
        if *self == Planet::Sun {
            return 0.0;
        }
        match self.triangle(epoch, params) {
            Some((radius, earth_distance, earth_radius)) => {
                phase_angle_from_triangle(radius, earth_distance, earth_radius)
            }
            None => {
                let moon = Planet::Moon.geocentric_coordinates(epoch, params);
                let sun = Planet::Sun.geocentric_coordinates(epoch, params);
                moon.angular_distance(&sun)
            }
        }
    }

    /// Percentage of the visible disk that is lit, 0 – 100.
    pub fn illuminated_percent(&self, epoch: &Epoch, params: &SkyParams) -> f64 {
        let phase = self.phase_angle(epoch, params) * RADEG;
        match self {
            // elongation, not the Sun–Moon–Earth angle
            Planet::Moon => 50.0 * (1.0 - phase.cos()),
            _ => 50.0 * (1.0 + phase.cos()),
        }
    }

    /// Apparent visual magnitude at a UTC instant.
    pub fn magnitude(&self, epoch: &Epoch, params: &SkyParams) -> f64 {
        if *self == Planet::Sun {
            return SUN_MAGNITUDE;
        }
        let Some((radius, earth_distance, earth_radius)) = self.triangle(epoch, params) else {
            return MOON_MAGNITUDE;
        };
        let phase = phase_angle_from_triangle(radius, earth_distance, earth_radius);
        self.magnitude_from_geometry(phase, radius, earth_distance)
    }

    /// Apparent visual magnitude from the phase angle and the distances.
    ///
    /// Arguments
    /// ---------
    /// * `phase_angle`: Sun–body–Earth angle (degrees)
    /// * `radius`: heliocentric distance r of the body (AU)
    /// * `earth_distance`: Earth–body distance Δ (AU)
    ///
    /// Return
    /// ------
    /// * `H(φ) + 5·log10(r·Δ)`; fixed values for the Sun (−27) and the Moon (−10)
    pub fn magnitude_from_geometry(
        &self,
        phase_angle: Degree,
        radius: AstronomicalUnit,
        earth_distance: AstronomicalUnit,
    ) -> f64 {
        let p = phase_angle / 100.0;
        let base = match self {
            Planet::Sun => return SUN_MAGNITUDE,
            Planet::Moon => return MOON_MAGNITUDE,
            Planet::Mercury => -0.42 + (3.80 - (2.73 - 2.00 * p) * p) * p,
            Planet::Venus => -4.40 + (0.09 + (2.39 - 0.65 * p) * p) * p,
            Planet::Mars => -1.52 + 1.6 * p,
            Planet::Jupiter => -9.40 + 0.5 * p,
            Planet::Saturn => -8.75,
            Planet::Uranus => -7.19,
            Planet::Neptune => -6.87,
            Planet::Pluto => -1.0,
        };
        base + 5.0 * (radius * earth_distance).log10()
    }

    /// (r, Δ, R): body–Sun, body–Earth and Earth–Sun distances; `None` for the Moon.
    fn triangle(
        &self,
        epoch: &Epoch,
        params: &SkyParams,
    ) -> Option<(AstronomicalUnit, AstronomicalUnit, AstronomicalUnit)> {
        let rates = self.element_rates()?;
        let jc = julian_centuries(epoch);
        let earth = earth_coordinates(jc, params);
        let body = heliocentric_from_rates(rates, jc, params);
        Some((body.radius(), body.distance_from(&earth), earth.radius()))
    }
}

fn phase_angle_from_triangle(
    radius: AstronomicalUnit,
    earth_distance: AstronomicalUnit,
    earth_radius: AstronomicalUnit,
) -> Degree {
    let cos_phase = (earth_distance * earth_distance + radius * radius
        - earth_radius * earth_radius)
        / (2.0 * earth_distance * radius);
    cos_phase.clamp(-1.0, 1.0).acos() / RADEG
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = SkywardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Planet::ALL
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| SkywardError::UnknownPlanet(s.to_string()))
    }
}
