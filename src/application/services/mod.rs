//! Application services.

pub mod sequence_controller;
pub mod typewriter;

pub use sequence_controller::{ScrollRequest, SequenceController, SequenceTimings};
pub use typewriter::{Typewriter, TypewriterTimings};
