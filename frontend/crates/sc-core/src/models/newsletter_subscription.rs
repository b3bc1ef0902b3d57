use crate::Result;
use crate::validation::require;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub email: String,
}

impl NewsletterSubscription {
    #[track_caller]
    pub fn new(email: &str) -> Result<Self> {
        let email = email.trim();
        require(&[("email", email)])?;

        Ok(Self {
            id: None,
            email: email.to_string(),
        })
    }
}
