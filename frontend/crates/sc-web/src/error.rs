use crate::CropHandle;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Image decode error: {source} {location}")]
    Decode {
        #[source]
        source: image::ImageError,
        location: ErrorLocation,
    },

    #[error("Image encode error: {source} {location}")]
    Encode {
        #[source]
        source: image::ImageError,
        location: ErrorLocation,
    },

    #[error("No live crop widget for handle {handle:?} {location}")]
    UnknownHandle {
        handle: CropHandle,
        location: ErrorLocation,
    },
}

impl WebError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        WebError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(source: image::ImageError) -> Self {
        WebError::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn encode(source: image::ImageError) -> Self {
        WebError::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_handle(handle: CropHandle) -> Self {
        WebError::UnknownHandle {
            handle,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
