use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        fields: Vec<&'static str>,
        location: ErrorLocation,
    },

    #[error("Invalid data URL: {message} {location}")]
    InvalidDataUrl {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Required fields were blank after trimming
    #[track_caller]
    pub fn missing_fields(fields: Vec<&'static str>) -> Self {
        CoreError::Validation {
            message: format!("missing required fields: {}", fields.join(", ")),
            fields,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_data_url<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidDataUrl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
