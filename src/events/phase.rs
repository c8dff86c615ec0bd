use std::fmt;

use hifitime::{Epoch, Unit};
use serde::{Deserialize, Serialize};

use crate::constants::Degree;
use crate::params::SkyParams;
use crate::planet::Planet;

/// Below this elongation the Moon is new (degrees)
const NEW_MOON_LIMIT: Degree = 22.5;
/// Above this elongation the Moon is full (degrees)
const FULL_MOON_LIMIT: Degree = 150.0;
const CRESCENT_LIMIT: Degree = 67.5;
const QUARTER_LIMIT: Degree = 112.5;

/// The eight conventional phases of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl LunarPhase {
    /// Classify an elongation, given whether it is increasing.
    ///
    /// Arguments
    /// ---------
    /// * `elongation`: Sun–Moon elongation in degrees (0 new, 180 full)
    /// * `waxing`: true when the elongation grows with time
    pub fn from_elongation(elongation: Degree, waxing: bool) -> Self {
        if elongation < NEW_MOON_LIMIT {
            return LunarPhase::New;
        }
        if elongation > FULL_MOON_LIMIT {
            return LunarPhase::Full;
        }

        match (elongation < CRESCENT_LIMIT, elongation < QUARTER_LIMIT, waxing) {
            (true, _, true) => LunarPhase::WaxingCrescent,
            (true, _, false) => LunarPhase::WaningCrescent,
            (false, true, true) => LunarPhase::FirstQuarter,
            (false, true, false) => LunarPhase::LastQuarter,
            (false, false, true) => LunarPhase::WaxingGibbous,
            (false, false, false) => LunarPhase::WaningGibbous,
        }
    }

    /// Phase of the Moon at a UTC instant.
    ///
    /// Whether the Moon waxes is decided by sampling the elongation one day later.
    pub fn at(epoch: &Epoch, params: &SkyParams) -> Self {
        let elongation = Planet::Moon.phase_angle(epoch, params);
        if elongation < NEW_MOON_LIMIT || elongation > FULL_MOON_LIMIT {
            return Self::from_elongation(elongation, true);
        }

        let tomorrow = *epoch + Unit::Day * 1.0;
        let waxing = Planet::Moon.phase_angle(&tomorrow, params) > elongation;
        Self::from_elongation(elongation, waxing)
    }

    pub fn is_waxing(&self) -> bool {
        matches!(
            self,
            LunarPhase::WaxingCrescent | LunarPhase::FirstQuarter | LunarPhase::WaxingGibbous
        )
    }
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LunarPhase::New => "New Moon",
            LunarPhase::WaxingCrescent => "Waxing Crescent",
            LunarPhase::FirstQuarter => "First Quarter",
            LunarPhase::WaxingGibbous => "Waxing Gibbous",
            LunarPhase::Full => "Full Moon",
            LunarPhase::WaningGibbous => "Waning Gibbous",
            LunarPhase::LastQuarter => "Last Quarter",
            LunarPhase::WaningCrescent => "Waning Crescent",
        };
        f.write_str(name)
    }
}
