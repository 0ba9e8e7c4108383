//! Contact submission DTOs.

use crate::domain::ContactForm;

/// Banner text shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
/// Banner text shown when the relay fails.
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Contact submission request.
#[derive(Debug, Clone)]
pub struct ContactRequest {
    /// Submitted form values.
    pub form: ContactForm,
}

impl ContactRequest {
    /// Creates new contact request.
    #[must_use]
    pub const fn new(form: ContactForm) -> Self {
        Self { form }
    }
}

/// Contact submission response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactResponse {
    /// Banner text to show.
    pub message: String,
}

impl ContactResponse {
    /// Creates the standard success response.
    #[must_use]
    pub fn delivered() -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}
