//! Contact form submission use case.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::dto::{ContactRequest, ContactResponse, FAILURE_MESSAGE};
use crate::domain::errors::ContactError;
use crate::domain::ports::ContactRelayPort;

/// Handles contact form submission workflow.
#[derive(Clone)]
pub struct SubmitContactUseCase {
    relay: Arc<dyn ContactRelayPort>,
}

impl SubmitContactUseCase {
    /// Creates new submit use case.
    #[must_use]
    pub const fn new(relay: Arc<dyn ContactRelayPort>) -> Self {
        Self { relay }
    }

    /// Validates and delivers the form.
    ///
    /// # Errors
    /// Returns a validation error without contacting the relay when a required
    /// field is missing, or the relay error when delivery fails.
    pub async fn execute(&self, request: ContactRequest) -> Result<ContactResponse, ContactError> {
        request.form.validate().map_err(|e| {
            debug!(error = %e, "Contact form failed validation");
            e
        })?;

        debug!(
            subject_present = !request.form.subject.trim().is_empty(),
            "Sending contact form"
        );

        match self.relay.send(&request.form).await {
            Ok(()) => {
                info!("Contact message delivered");
                Ok(ContactResponse::delivered())
            }
            Err(e) => {
                if e.is_network_error() {
                    warn!(error = %e, "Contact relay unreachable");
                } else {
                    error!(error = %e, "Failed to send contact message");
                }
                Err(e)
            }
        }
    }

    /// Returns the banner text for a failed submission.
    #[must_use]
    pub fn banner_for(error: &ContactError) -> String {
        if error.is_validation() {
            error.to_string()
        } else {
            FAILURE_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::SUCCESS_MESSAGE;
    use crate::domain::ContactForm;
    use crate::domain::ports::mocks::MockContactRelayPort;

    fn valid_form() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "Hello", "Let's build something")
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let mut relay = MockContactRelayPort::new();
        relay
            .expect_send()
            .withf(|form| form.name == "Ada")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = SubmitContactUseCase::new(Arc::new(relay));
        let response = use_case
            .execute(ContactRequest::new(valid_form()))
            .await
            .unwrap();

        assert_eq!(response.message, SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_fields_skip_relay() {
        let mut relay = MockContactRelayPort::new();
        relay.expect_send().never();

        let use_case = SubmitContactUseCase::new(Arc::new(relay));
        let form = ContactForm::new("", "ada@example.com", "", "");
        let result = use_case.execute(ContactRequest::new(form)).await;

        let err = result.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            SubmitContactUseCase::banner_for(&err),
            "Please fill in all required fields"
        );
    }

    #[tokio::test]
    async fn test_relay_failure_maps_to_generic_banner() {
        let mut relay = MockContactRelayPort::new();
        relay
            .expect_send()
            .times(1)
            .returning(|_| Err(ContactError::network("connection refused")));

        let use_case = SubmitContactUseCase::new(Arc::new(relay));
        let err = use_case
            .execute(ContactRequest::new(valid_form()))
            .await
            .unwrap_err();

        assert!(err.is_network_error());
        assert_eq!(SubmitContactUseCase::banner_for(&err), FAILURE_MESSAGE);
    }

    #[test]
    fn test_blocking_execution() {
        let mut relay = MockContactRelayPort::new();
        relay
            .expect_send()
            .returning(|_| Err(ContactError::NotConfigured));

        let use_case = SubmitContactUseCase::new(Arc::new(relay));
        let result = tokio_test::block_on(use_case.execute(ContactRequest::new(valid_form())));
        assert!(matches!(result, Err(ContactError::NotConfigured)));
    }
}
