use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RError {
    #[error("Invalid journey type: {0}")]
    InvalidJourneyType(String),
    #[error("Invalid starting station: {0}")]
    InvalidStation(usize),
    #[error("Invalid destination: {0}")]
    InvalidDestination(usize),
    #[error("Invalid number of passengers: {0} (expected 1 to {max})", max = crate::MAX_PASSENGERS)]
    InvalidPassengerCount(usize),
    #[error("Invalid passenger name: {0:?}")]
    InvalidPassengerName(String),
    #[error("Could not open {}: {source}", path.display())]
    CatalogUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Station catalog holds more than {max} stations", max = crate::MAX_STATIONS)]
    CatalogOverflow,
    #[error("Station #{ordinal} has an invalid name: {name:?}")]
    InvalidStationName { ordinal: usize, name: String },
    #[error("Station catalog is empty")]
    EmptyCatalog,
    #[error("Could not write ticket to {}: {source}", path.display())]
    LogWriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Input closed")]
    InputClosed,
    #[error("Malformed ticket record: {0}")]
    MalformedRecord(String),
    #[error("Io Error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RError {
    /// True for errors that reject the purchase being entered rather than the session.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidJourneyType(_)
                | Self::InvalidStation(_)
                | Self::InvalidDestination(_)
                | Self::InvalidPassengerCount(_)
                | Self::InvalidPassengerName(_)
        )
    }
}

pub type RResult<T> = Result<T, RError>;
