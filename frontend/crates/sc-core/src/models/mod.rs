pub mod client;
pub mod contact;
pub mod data_url;
pub mod newsletter_subscription;
pub mod project;

use serde::{Deserialize, Deserializer};

/// Text column the backend may return as `null` or leave out; both read as empty
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
