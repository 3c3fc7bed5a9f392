use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Local format failures for a tax identifier.
#[derive(Error, Debug)]
pub enum IdentifierError {
    #[error("{message} {location}")]
    InvalidLength {
        message: &'static str,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    InvalidFormat {
        message: &'static str,
        location: ErrorLocation,
    },
}

impl IdentifierError {
    #[track_caller]
    pub fn invalid_length(message: &'static str) -> Self {
        IdentifierError::InvalidLength {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_format(message: &'static str) -> Self {
        IdentifierError::InvalidFormat {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// User-facing text, without the source location.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidLength { message, .. } | Self::InvalidFormat { message, .. } => message,
        }
    }
}

/// Failures talking to the GST registry.
#[derive(Error, Debug)]
pub enum GstError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Registry error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl GstError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        GstError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        GstError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api_error(status: u16, code: String, message: String) -> Self {
        GstError::Api {
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for GstError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GstError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for GstError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        GstError::from_json(err)
    }
}

pub type IdentifierResult<T> = std::result::Result<T, IdentifierError>;
pub type GstResult<T> = std::result::Result<T, GstError>;
