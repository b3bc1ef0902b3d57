//! Validate, POST, and turn the outcome into user-facing text.

use std::future::Future;

use log::{debug, error};
use sc_client::{ApiError, ApiResult};

/// The fixed texts one form shows
#[derive(Debug, Clone, Copy)]
pub struct SubmitMessages {
    /// Used in log lines, e.g. "adding project"
    pub action: &'static str,
    /// A required field was blank
    pub invalid: &'static str,
    /// Rejected by the backend without a usable body
    pub rejected: &'static str,
    /// The request failed without an answer, or the answer did not decode
    pub failed: &'static str,
    pub success: &'static str,
}

pub const PROJECT: SubmitMessages = SubmitMessages {
    action: "adding project",
    invalid: "Please fill all fields and upload an image",
    rejected: "Failed to add project",
    failed: "Error adding project. Please try again.",
    success: "Project added successfully!",
};

pub const CLIENT: SubmitMessages = SubmitMessages {
    action: "adding client",
    invalid: "Please fill all fields and upload an image",
    rejected: "Failed to add client",
    failed: "Error adding client. Please try again.",
    success: "Client added successfully!",
};

pub const HERO_CONTACT: SubmitMessages = SubmitMessages {
    action: "submitting consultation request",
    invalid: "Please fill in all required fields.",
    rejected: "Failed to submit form",
    failed: "Error submitting form. Please try again.",
    success: "Thank you! We will contact you soon.",
};

pub const CONTACT: SubmitMessages = SubmitMessages {
    action: "submitting form",
    invalid: "Please fill in all required fields.",
    rejected: "Failed to submit form",
    failed: "Error submitting form. Please try again.",
    success: "Thank you! Your message has been submitted successfully.",
};

pub const NEWSLETTER: SubmitMessages = SubmitMessages {
    action: "subscribing",
    invalid: "Please enter a valid email address.",
    rejected: "Failed to subscribe",
    failed: "Error subscribing. Please try again.",
    success: "Thank you for subscribing!",
};

#[derive(Debug)]
pub enum Submission<R> {
    /// Validation failed; nothing was sent
    Invalid(String),
    Failed(String),
    Accepted(R),
}

/// Submit a validated payload.
///
/// `payload` is the result of building the entity from trimmed form input; an
/// `Err` short-circuits before `send` is ever called.
pub async fn submit<P, R, E, F, Fut>(
    payload: Result<P, E>,
    send: F,
    messages: &SubmitMessages,
) -> Submission<R>
where
    E: std::fmt::Display,
    F: FnOnce(P) -> Fut,
    Fut: Future<Output = ApiResult<R>>,
{
    let payload = match payload {
        Ok(payload) => payload,
        Err(err) => {
            debug!("Rejected {} before sending: {err}", messages.action);
            return Submission::Invalid(messages.invalid.to_string());
        }
    };

    match send(payload).await {
        Ok(created) => Submission::Accepted(created),
        Err(err) => {
            error!("Error {}: {err}", messages.action);
            Submission::Failed(failure_message(&err, messages))
        }
    }
}

/// Backend rejections use the body's message; anything else the fixed text
pub fn failure_message(err: &ApiError, messages: &SubmitMessages) -> String {
    if err.is_status() {
        err.user_message(messages.rejected)
    } else {
        messages.failed.to_string()
    }
}
