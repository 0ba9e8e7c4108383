//! Contact relay port definition.

use async_trait::async_trait;

use crate::domain::contact::ContactForm;
use crate::domain::errors::ContactError;

/// Port for delivering contact form submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRelayPort: Send + Sync {
    /// Delivers the form. Success means the relay accepted the message.
    async fn send(&self, form: &ContactForm) -> Result<(), ContactError>;
}
