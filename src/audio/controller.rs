use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;

use crate::error::{PlayerError, Result};

use super::types::{AudioOutput, PlaybackState};

/// Idle/Playing/Paused state machine in front of an [`AudioOutput`].
///
/// The controller is the only owner of [`PlaybackState`]; everything else
/// reads it through [`state`](Self::state).
pub struct PlaybackController<O> {
    output: O,
    state: PlaybackState,
    loaded: Option<PathBuf>,
}

impl<O: AudioOutput> PlaybackController<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            state: PlaybackState::Idle,
            loaded: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn loaded(&self) -> Option<&Path> {
        self.loaded.as_deref()
    }

    /// Replace the loaded track. Any playback in flight is stopped first and
    /// the controller ends up `Idle`, whether or not the load succeeds.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        self.stop();
        self.loaded = None;

        self.output.load(path)?;
        debug!("loaded {}", path.display());
        self.loaded = Some(path.to_path_buf());
        Ok(())
    }

    /// Start the loaded track, or resume it when paused.
    pub fn play(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => {}
            PlaybackState::Paused => {
                self.output.unpause();
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Idle => {
                if self.loaded.is_none() {
                    return Err(PlayerError::NothingLoaded);
                }
                self.output.play()?;
                self.state = PlaybackState::Playing;
            }
        }
        Ok(())
    }

    /// Freeze output at the current position. No-op unless playing.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.output.pause();
            self.state = PlaybackState::Paused;
        }
    }

    pub fn stop(&mut self) {
        self.output.stop();
        self.state = PlaybackState::Idle;
    }

    pub fn is_busy(&self) -> bool {
        self.output.is_busy()
    }

    pub fn position(&self) -> Duration {
        match self.state {
            PlaybackState::Idle => Duration::ZERO,
            PlaybackState::Playing | PlaybackState::Paused => self.output.position(),
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &O {
        &self.output
    }

    #[cfg(test)]
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
