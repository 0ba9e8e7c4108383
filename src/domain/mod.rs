//! Domain layer with content entities, the intro sequence model and port definitions.

/// Contact form model.
pub mod contact;
/// Portfolio content entities.
pub mod content;
/// Error types.
pub mod errors;
/// Hover tracking for the cursor follower.
pub mod hover;
/// Port definitions.
pub mod ports;
/// Page scroll model.
pub mod scroll;
/// Intro sequence phases.
pub mod sequence;
/// One-shot timer.
pub mod timer;

pub use contact::{ContactField, ContactForm, FormStatus};
pub use content::{Portfolio, Section};
pub use errors::{ContactError, ContentError};
pub use ports::{ContactRelayPort, LinkOpenerPort};
pub use scroll::ScrollState;
pub use sequence::{Phase, SequenceFlags};
pub use timer::OneShotTimer;
