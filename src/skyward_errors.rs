use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkywardError {
    #[error("Unknown planet name: {0}")]
    UnknownPlanet(String),

    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),

    #[error("Unable to parse epoch: {0}")]
    EpochParseError(#[from] hifitime::HifitimeError),

    #[error("Invalid sky parameter: {0}")]
    InvalidParameter(String),

    #[error("Satellite position unavailable: {0}")]
    SatelliteUnavailable(String),
}

impl PartialEq for SkywardError {
    fn eq(&self, other: &Self) -> bool {
        use SkywardError::*;
        match (self, other) {
            (UnknownPlanet(a), UnknownPlanet(b)) => a == b,
            (InvalidEpoch(a), InvalidEpoch(b)) => a == b,
            (InvalidParameter(a), InvalidParameter(b)) => a == b,
            (SatelliteUnavailable(a), SatelliteUnavailable(b)) => a == b,

            // hifitime errors are not comparable: equal when same variant
            (EpochParseError(_), EpochParseError(_)) => true,

            _ => false,
        }
    }
}
