//! `data:` URLs carrying base64 payloads, the form images travel in.

use crate::{CoreError, Result};

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub media_type: String,
    pub data: Vec<u8>,
}

impl DataUrl {
    pub fn new<S: Into<String>>(media_type: S, data: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            data,
        }
    }

    /// Parse `data:<media type>;base64,<payload>`.
    /// Percent-encoded (non-base64) payloads are rejected.
    #[track_caller]
    pub fn parse(input: &str) -> Result<Self> {
        let rest = input
            .trim()
            .strip_prefix(SCHEME)
            .ok_or_else(|| CoreError::invalid_data_url("missing data: scheme"))?;

        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| CoreError::invalid_data_url("missing payload separator"))?;

        let media_type = meta
            .strip_suffix(BASE64_MARKER)
            .ok_or_else(|| CoreError::invalid_data_url("only base64 payloads are supported"))?;

        let data = STANDARD
            .decode(payload)
            .map_err(|e| CoreError::invalid_data_url(e.to_string()))?;

        Ok(Self::new(media_type, data))
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{SCHEME}{}{BASE64_MARKER},{}",
            self.media_type,
            STANDARD.encode(&self.data)
        )
    }
}
