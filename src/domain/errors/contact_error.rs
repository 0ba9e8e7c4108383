//! Contact submission error types.

use thiserror::Error;

/// Contact form error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ContactError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields { fields: Vec<&'static str> },

    #[error("Please enter a valid email address")]
    InvalidEmail { value: String },

    #[error("contact relay is not configured")]
    NotConfigured,

    #[error("submission rejected by relay: {message}")]
    Rejected { message: String },

    #[error("network error while sending message: {message}")]
    NetworkError { message: String },

    #[error("unexpected contact relay error: {message}")]
    Unexpected { message: String },
}

impl ContactError {
    /// Creates missing fields error.
    #[must_use]
    pub fn missing(fields: Vec<&'static str>) -> Self {
        Self::MissingRequiredFields { fields }
    }

    /// Creates rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the error was caught before any network call.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredFields { .. } | Self::InvalidEmail { .. }
        )
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(ContactError::missing(vec!["name"]).is_validation());
        assert!(
            ContactError::InvalidEmail {
                value: "nope".to_string()
            }
            .is_validation()
        );
        assert!(!ContactError::network("timeout").is_validation());
        assert!(!ContactError::NotConfigured.is_validation());
    }

    #[test]
    fn test_missing_fields_message() {
        let err = ContactError::missing(vec!["name", "message"]);
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }
}
