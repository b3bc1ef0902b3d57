//! Shared entities for the showcase site.
//!
//! These are the DTOs exchanged verbatim with the REST backend. The only
//! client-side rules are trimming and non-empty checks on required fields.

pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::client::Client;
pub use models::contact::{CONSULTATION_REQUEST_CITY, Contact};
pub use models::data_url::DataUrl;
pub use models::newsletter_subscription::NewsletterSubscription;
pub use models::project::Project;
