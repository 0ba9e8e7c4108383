use serde::{Deserialize, Serialize};

use crate::domain::ContactForm;

/// JSON body posted to the relay endpoint.
#[derive(Debug, Serialize)]
pub struct SubmissionPayload<'a> {
    /// Sender name.
    pub name: &'a str,
    /// Sender e-mail.
    pub email: &'a str,
    /// Subject, empty when not given.
    pub subject: &'a str,
    /// Message body.
    pub message: &'a str,
}

impl<'a> From<&'a ContactForm> for SubmissionPayload<'a> {
    fn from(form: &'a ContactForm) -> Self {
        Self {
            name: form.name.trim(),
            email: form.email.trim(),
            subject: form.subject.trim(),
            message: form.message.trim(),
        }
    }
}

/// Error body returned by the relay.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub message: String,
}
