//! Project entity - a portfolio item shown on the landing page.

use crate::Result;
use crate::validation::require;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Assigned by the backend, never sent
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub description: String,
    /// Data URL of the cropped upload, or a remote URL
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub image_url: String,
}

impl Project {
    /// Build a new project from raw form input.
    /// Every field is trimmed and must be non-empty.
    #[track_caller]
    pub fn new(name: &str, description: &str, image_url: &str) -> Result<Self> {
        let (name, description, image_url) = (name.trim(), description.trim(), image_url.trim());
        require(&[
            ("name", name),
            ("description", description),
            ("imageUrl", image_url),
        ])?;

        Ok(Self {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
        })
    }
}
