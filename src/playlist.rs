//! The ordered track list for one scanned folder and its wrap-around cursor.

use log::debug;

use crate::error::{PlayerError, Result};
use crate::library::Track;

/// Index after `current` in a list of `len` entries, wrapping to the start.
pub fn next_index(len: usize, current: usize) -> Result<usize> {
    if len == 0 {
        return Err(PlayerError::EmptyPlaylist);
    }
    Ok((current % len + 1) % len)
}

/// Index before `current` in a list of `len` entries, wrapping to the end.
pub fn previous_index(len: usize, current: usize) -> Result<usize> {
    if len == 0 {
        return Err(PlayerError::EmptyPlaylist);
    }
    Ok((current % len + len - 1) % len)
}

/// Tracks from a single folder scan plus the position of the current one.
///
/// `current` is only meaningful while the list is non-empty.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    current: usize,
}

impl Playlist {
    /// Start a fresh playlist positioned on the first track.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks, current: 0 }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current)
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    /// Move to an explicitly chosen entry.
    pub fn select(&mut self, index: usize) -> Result<usize> {
        if index >= self.tracks.len() {
            return Err(PlayerError::NoSelection);
        }
        self.current = index;
        Ok(index)
    }

    /// Step forward one entry, wrapping at the end.
    pub fn advance(&mut self) -> Result<usize> {
        self.current = next_index(self.len(), self.current)?;
        Ok(self.current)
    }

    /// Step back one entry, wrapping at the start.
    pub fn retreat(&mut self) -> Result<usize> {
        self.current = previous_index(self.len(), self.current)?;
        Ok(self.current)
    }

    /// Drop the entry at `bad` (typically a file that failed to load) and
    /// land on `bad mod new_len`, i.e. whatever slid into its slot.
    ///
    /// Emptying the list is reported as [`PlayerError::EmptyPlaylist`]; the
    /// caller is expected to stop playback.
    pub fn remove_and_reindex(&mut self, bad: usize) -> Result<usize> {
        if bad >= self.tracks.len() {
            return Err(PlayerError::NoSelection);
        }

        let removed = self.tracks.remove(bad);
        debug!("removed {} from playlist", removed.path.display());

        if self.tracks.is_empty() {
            self.current = 0;
            return Err(PlayerError::EmptyPlaylist);
        }
        self.current = bad % self.tracks.len();
        Ok(self.current)
    }

    /// [`remove_and_reindex`](Self::remove_and_reindex) for the current entry.
    pub fn remove_current(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        self.remove_and_reindex(self.current)
    }
}
