//! Playback state and the capability set the controller needs from an
//! audio backend.

use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// The playback state of the controller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing playing: never started, explicitly stopped, or freshly loaded.
    #[default]
    Idle,
    Playing,
    Paused,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Stopped",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
        }
    }
}

/// One-track-at-a-time audio output.
///
/// Implementations hold at most one loaded track. `load` replaces it and
/// leaves it ready but silent; `play` starts it from the beginning.
pub trait AudioOutput {
    /// Open and decode `path`, replacing whatever was loaded before.
    fn load(&mut self, path: &Path) -> Result<()>;
    /// Start the loaded track from its beginning.
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
    fn unpause(&mut self);
    /// Silence output and discard the playback position.
    fn stop(&mut self);
    /// True only while audio is actively being produced.
    fn is_busy(&self) -> bool;
    /// Elapsed position within the loaded track.
    fn position(&self) -> Duration;
}
