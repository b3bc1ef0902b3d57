use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (refused, reset, DNS...)
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status
    #[error("API error: status {status}: {body} {location}")]
    Status {
        status: u16,
        /// `message` field of a JSON error body, when present and non-blank
        message: Option<String>,
        /// Raw response body
        body: String,
        location: ErrorLocation,
    },

    /// A 2xx response whose body did not decode
    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ApiError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ApiError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Build a status error, pulling `message` out of a JSON body if there is one
    #[track_caller]
    pub fn from_status(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .as_ref()
            .and_then(|parsed| parsed.get("message"))
            .and_then(Value::as_str)
            .filter(|message| !message.trim().is_empty())
            .map(str::to_string);

        ApiError::Status {
            status,
            message,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text to show the user for a rejected request.
    ///
    /// A JSON body yields its `message` field or `default`. A body that is
    /// not JSON is shown as is, unless empty. Errors without a response always
    /// yield `default`.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Status { body, .. }
                if !body.trim().is_empty() && serde_json::from_str::<Value>(body).is_err() =>
            {
                body.trim().to_string()
            }
            _ => default.to_string(),
        }
    }

    /// True when the backend could not be reached at all
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Http { .. })
    }

    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ApiError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ApiError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
