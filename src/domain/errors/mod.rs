//! Domain error types.

mod contact_error;
mod content_error;

pub use contact_error::ContactError;
pub use content_error::ContentError;
