//! Contact form model.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::errors::ContactError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex")
});

/// Banner shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// No banner.
    #[default]
    None,
    /// Message was delivered.
    Success(String),
    /// Validation or delivery failed.
    Error(String),
}

impl FormStatus {
    /// Returns banner text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Success(msg) | Self::Error(msg) => Some(msg),
        }
    }

    /// Returns whether this is an error banner.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Sender name (required).
    Name,
    /// Sender e-mail (required).
    Email,
    /// Subject line.
    Subject,
    /// Message body (required).
    Message,
}

impl ContactField {
    /// Fields in tab order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Returns field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// Returns whether the field must be filled in.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Subject)
    }

    /// Returns the next field in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// Returns the previous field in tab order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Subject => Self::Email,
            Self::Message => Self::Subject,
        }
    }
}

/// Values entered in the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender e-mail.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Creates a form from its four fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Validates required fields and e-mail shape without touching the network.
    ///
    /// # Errors
    /// Returns [`ContactError::MissingRequiredFields`] when a required field is
    /// blank, or [`ContactError::InvalidEmail`] when the address is malformed.
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing: Vec<&'static str> = ContactField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .map(ContactField::label)
            .collect();

        if !missing.is_empty() {
            return Err(ContactError::missing(missing));
        }

        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail {
                value: self.email.clone(),
            });
        }

        Ok(())
    }
}
