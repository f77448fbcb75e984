//! Crate-wide error type.

use thiserror::Error as ThisError;

/// Errors surfaced at the input boundary of the crate.
///
/// Solvers and distance computation are total over a valid
/// [`DistanceMatrix`](crate::distance::DistanceMatrix) and never produce
/// these; they come from generation, validation, configuration and logger
/// setup.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("logger init failed: {0}")]
    Logger(String),
}

/// The structured kind of an [`Error`], without its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InvalidData,
    Config,
    Logger,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::InvalidData(_) => ErrorKind::InvalidData,
            Self::Config(_) => ErrorKind::Config,
            Self::Logger(_) => ErrorKind::Logger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = Error::invalid_input("point count must be non-negative, got -3");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            err.to_string(),
            "invalid input: point count must be non-negative, got -3"
        );
    }

    #[test]
    fn test_config_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().starts_with("invalid config:"));
    }
}
