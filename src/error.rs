use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Message shown to the teacher for every hard generation failure.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate lesson pack. Please check your API key and try again.";

/// Why the model's reply could not be turned into a lesson pack.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("no JSON object found in model response")]
    NoJson,
    #[error("invalid JSON in model response: {0}")]
    InvalidJson(String),
}

/// Failure of a single lesson-generation request.
///
/// Variants stay distinct so the log says what went wrong; the teacher only
/// ever sees [`GenerationError::user_message`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("failed to create model client: {0}")]
    ClientInit(String),
    #[error("model request failed: {0}")]
    Network(String),
    #[error("model did not answer within {0:?}")]
    Timeout(Duration),
    #[error("model returned no choices")]
    EmptyResponse,
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl GenerationError {
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, GenerationError::Parse(_))
    }
}

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} contains no text")]
    Empty(PathBuf),
    #[error("could not start file reader: {0}")]
    Runtime(#[source] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("could not create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be greater than zero")]
    NotPositive { key: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_generation_error_shares_user_message() {
        let errors = vec![
            GenerationError::ClientInit("no key".to_string()),
            GenerationError::Network("connection reset".to_string()),
            GenerationError::Timeout(Duration::from_secs(60)),
            GenerationError::EmptyResponse,
            GenerationError::Parse(ParseError::NoJson),
            GenerationError::Parse(ParseError::InvalidJson("eof".to_string())),
        ];

        for error in errors {
            assert_eq!(error.user_message(), GENERATION_FAILED_MESSAGE);
        }
    }

    #[test]
    fn test_display_keeps_internal_detail() {
        let error = GenerationError::Network("connection reset".to_string());
        assert_eq!(error.to_string(), "model request failed: connection reset");

        let error: GenerationError = ParseError::NoJson.into();
        assert!(error.is_parse());
        assert_eq!(error.to_string(), "no JSON object found in model response");
    }
}
