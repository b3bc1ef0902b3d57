use crate::Result;
use crate::validation::require;

use serde::{Deserialize, Serialize};

/// City recorded for requests sent from the hero shortcut form
pub const CONSULTATION_REQUEST_CITY: &str = "Consultation Request";

/// A contact submission from a site visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub mobile_number: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub city: String,
}

impl Contact {
    #[track_caller]
    pub fn new(full_name: &str, email: &str, mobile_number: &str, city: &str) -> Result<Self> {
        let full_name = full_name.trim();
        let email = email.trim();
        let mobile_number = mobile_number.trim();
        let city = city.trim();
        require(&[
            ("fullName", full_name),
            ("email", email),
            ("mobileNumber", mobile_number),
            ("city", city),
        ])?;

        Ok(Self {
            id: None,
            full_name: full_name.to_string(),
            email: email.to_string(),
            mobile_number: mobile_number.to_string(),
            city: city.to_string(),
        })
    }

    /// Contact from the hero form, which has no city input.
    #[track_caller]
    pub fn consultation_request(full_name: &str, email: &str, mobile_number: &str) -> Result<Self> {
        Self::new(full_name, email, mobile_number, CONSULTATION_REQUEST_CITY)
    }
}
