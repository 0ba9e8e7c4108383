//! HTTP contact relay client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::{ErrorResponse, SubmissionPayload};
use crate::domain::ContactForm;
use crate::domain::errors::ContactError;
use crate::domain::ports::ContactRelayPort;

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Posts contact submissions as JSON to a configured endpoint.
pub struct HttpContactRelay {
    client: Client,
    endpoint: Option<String>,
}

impl HttpContactRelay {
    /// Creates a relay client. With no endpoint every send reports
    /// [`ContactError::NotConfigured`].
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self, ContactError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ContactError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.filter(|url| !url.trim().is_empty()),
        })
    }

    /// Returns whether an endpoint is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> ContactError {
        let error_message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("HTTP {status}"),
        };

        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ContactError::rejected(error_message)
            }
            StatusCode::TOO_MANY_REQUESTS => ContactError::rejected("too many submissions"),
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                ContactError::network("relay is temporarily unavailable")
            }
            _ => ContactError::unexpected(format!("unexpected response: {status} - {error_message}")),
        }
    }
}

#[async_trait]
impl ContactRelayPort for HttpContactRelay {
    async fn send(&self, form: &ContactForm) -> Result<(), ContactError> {
        let Some(endpoint) = &self.endpoint else {
            warn!("Contact relay endpoint not configured");
            return Err(ContactError::NotConfigured);
        };

        debug!(endpoint = %endpoint, "Posting contact submission");

        let response = self
            .client
            .post(endpoint)
            .json(&SubmissionPayload::from(form))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach contact relay");
                if e.is_timeout() {
                    ContactError::network("request timed out")
                } else if e.is_connect() {
                    ContactError::network("failed to connect to relay")
                } else {
                    ContactError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        debug!(status = %status, "Contact relay accepted submission");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let relay = HttpContactRelay::new(None, Duration::from_secs(5));
        assert!(relay.is_ok());
        assert!(!relay.unwrap().is_configured());
    }

    #[test]
    fn test_blank_endpoint_is_unconfigured() {
        let relay = HttpContactRelay::new(Some("  ".to_string()), Duration::from_secs(5)).unwrap();
        assert!(!relay.is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_send_fails_fast() {
        let relay = HttpContactRelay::new(None, Duration::from_secs(5)).unwrap();
        let form = ContactForm::new("Ada", "ada@example.com", "", "Hi");
        assert!(matches!(
            relay.send(&form).await,
            Err(ContactError::NotConfigured)
        ));
    }

    #[test]
    fn test_payload_trims_fields() {
        let form = ContactForm::new(" Ada ", "ada@example.com\n", "", " Hi ");
        let json = serde_json::to_value(SubmissionPayload::from(&form)).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["subject"], "");
        assert_eq!(json["message"], "Hi");
    }
}
