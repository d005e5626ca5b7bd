use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarsClockError {
    #[error("Invalid terrestrial timestamp (must be finite): {0}")]
    InvalidInput(f64),

    #[error("Invalid time of day format, expected HH:MM or HH:MM:SS: {0}")]
    InvalidTimeFormat(String),

    #[error("Unable to parse epoch: {0}")]
    InvalidEpoch(String),

    #[error("Markers not found in document: start={start:?}, end={end:?}")]
    MarkersNotFound { start: String, end: String },

    #[error("HTTP reqwest error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response from remote service: {0}")]
    UnexpectedResponse(String),

    #[error("Unable to perform file operation: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for MarsClockError {
    fn from(err: toml::de::Error) -> Self {
        MarsClockError::Config(err.to_string())
    }
}

impl From<hifitime::HifitimeError> for MarsClockError {
    fn from(err: hifitime::HifitimeError) -> Self {
        MarsClockError::InvalidEpoch(err.to_string())
    }
}

impl PartialEq for MarsClockError {
    fn eq(&self, other: &Self) -> bool {
        use MarsClockError::*;
        match (self, other) {
            (InvalidInput(a), InvalidInput(b)) => a.to_bits() == b.to_bits(),
            (InvalidTimeFormat(a), InvalidTimeFormat(b)) => a == b,
            (InvalidEpoch(a), InvalidEpoch(b)) => a == b,
            (
                MarkersNotFound { start: s1, end: e1 },
                MarkersNotFound { start: s2, end: e2 },
            ) => s1 == s2 && e1 == e2,
            (UnexpectedResponse(a), UnexpectedResponse(b)) => a == b,
            (Config(a), Config(b)) => a == b,

            // Not comparable: equal when the variant matches
            (Http(_), Http(_)) => true,
            (Io(_), Io(_)) => true,

            _ => false,
        }
    }
}
