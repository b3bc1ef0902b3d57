//! HTTP client for the showcase REST API.
//!
//! Both page controllers talk to the backend exclusively through [`ApiClient`].

mod client;
mod error;


pub use client::ApiClient;
pub use error::{ApiError, Result as ApiResult};

pub const HEALTH_PATH: &str = "/health";
pub const PROJECTS_PATH: &str = "/projects";
pub const CLIENTS_PATH: &str = "/clients";
pub const CONTACTS_PATH: &str = "/contacts";
pub const NEWSLETTER_LIST_PATH: &str = "/newsletter/all";
pub const NEWSLETTER_SUBSCRIBE_PATH: &str = "/newsletter/subscribe";
