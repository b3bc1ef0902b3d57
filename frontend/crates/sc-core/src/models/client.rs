//! Client entity - a testimonial card with the client's role.

use crate::Result;
use crate::validation::require;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub description: String,
    /// Job title shown under the name (e.g. "CEO, Acme")
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub designation: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub image_url: String,
}

impl Client {
    #[track_caller]
    pub fn new(name: &str, description: &str, designation: &str, image_url: &str) -> Result<Self> {
        let name = name.trim();
        let description = description.trim();
        let designation = designation.trim();
        let image_url = image_url.trim();
        require(&[
            ("name", name),
            ("description", description),
            ("designation", designation),
            ("imageUrl", image_url),
        ])?;

        Ok(Self {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            designation: designation.to_string(),
            image_url: image_url.to_string(),
        })
    }
}
