//! Audio playback: the controller state machine and its rodio backend.

mod controller;
mod output;
mod sink;
mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use controller::PlaybackController;
pub use output::RodioOutput;
pub use types::{AudioOutput, PlaybackState};
