use std::path::PathBuf;

use crate::config::TrackDisplayField;

use super::display::display_from_field;

/// One playable file from a scanned folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
}

impl Track {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Name shown in the track list and the now-playing label.
    pub fn display(&self, field: TrackDisplayField) -> String {
        display_from_field(&self.path, field)
    }
}
