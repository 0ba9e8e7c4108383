//! Data transfer objects for the application layer.

mod contact_dto;

pub use contact_dto::{ContactRequest, ContactResponse, FAILURE_MESSAGE, SUCCESS_MESSAGE};
