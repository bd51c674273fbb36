//! In-memory [`AudioOutput`] for tests: records every call and lets a test
//! decide which files fail to load and when a track "finishes".

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{PlayerError, Result};

use super::types::AudioOutput;

#[derive(Debug, Default)]
pub struct FakeOutput {
    pub loads: Vec<PathBuf>,
    pub plays: usize,
    pub pauses: usize,
    pub unpauses: usize,
    pub stops: usize,
    pub broken: HashSet<PathBuf>,
    pub position: Duration,
    loaded: Option<PathBuf>,
    busy: bool,
}

impl FakeOutput {
    pub fn with_broken<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            broken: paths.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Simulate the loaded track reaching its natural end.
    pub fn finish_track(&mut self) {
        self.busy = false;
    }
}

impl AudioOutput for FakeOutput {
    fn load(&mut self, path: &Path) -> Result<()> {
        self.busy = false;
        self.loaded = None;
        if self.broken.contains(path) {
            return Err(PlayerError::Load {
                path: path.to_path_buf(),
                reason: "unsupported format".to_string(),
            });
        }
        self.loads.push(path.to_path_buf());
        self.loaded = Some(path.to_path_buf());
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.loaded.is_none() {
            return Err(PlayerError::NothingLoaded);
        }
        self.plays += 1;
        self.position = Duration::ZERO;
        self.busy = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.pauses += 1;
        self.busy = false;
    }

    fn unpause(&mut self) {
        self.unpauses += 1;
        self.busy = true;
    }

    fn stop(&mut self) {
        self.stops += 1;
        self.busy = false;
    }

    fn is_busy(&self) -> bool {
        self.busy
    }

    fn position(&self) -> Duration {
        self.position
    }
}
