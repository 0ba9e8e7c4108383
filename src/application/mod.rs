//! Application layer with the intro sequence controller, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Sequencing and animation services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{ContactRequest, ContactResponse};
pub use services::{ScrollRequest, SequenceController, SequenceTimings};
pub use use_cases::SubmitContactUseCase;
