use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::error::{PlayerError, Result};

use super::sink::create_paused_sink;
use super::types::AudioOutput;

/// [`AudioOutput`] backed by the default rodio output device.
pub struct RodioOutput {
    stream: OutputStream,
    sink: Option<Sink>,
    loaded: Option<PathBuf>,
}

impl RodioOutput {
    /// Open the default output device.
    pub fn open() -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlayerError::MixerInit(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            loaded: None,
        })
    }
}

impl AudioOutput for RodioOutput {
    fn load(&mut self, path: &Path) -> Result<()> {
        self.stop();
        self.loaded = None;

        self.sink = Some(create_paused_sink(&self.stream, path)?);
        self.loaded = Some(path.to_path_buf());
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        let Some(path) = self.loaded.as_deref() else {
            return Err(PlayerError::NothingLoaded);
        };

        // A stopped or finished sink has nothing left to play; rebuild it from the start.
        if self.sink.as_ref().is_none_or(|s| s.empty()) {
            debug!("rebuilding sink for {}", path.display());
            self.sink = Some(create_paused_sink(&self.stream, path)?);
        }
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
    }

    fn unpause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn is_busy(&self) -> bool {
        self.sink
            .as_ref()
            .is_some_and(|s| !s.is_paused() && !s.empty())
    }

    fn position(&self) -> Duration {
        self.sink.as_ref().map_or(Duration::ZERO, |s| s.get_pos())
    }
}
