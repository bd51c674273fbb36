//! Error types shared by the library scanner, playlist and playback layers.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between picking a folder and hearing audio.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The audio output device could not be opened.
    #[error("could not initialize audio output: {0}")]
    MixerInit(String),

    /// No playable files were found, or every entry has been dropped.
    #[error("no playable tracks, select a music folder first")]
    EmptyPlaylist,

    /// A single file could not be opened or decoded.
    #[error("could not load track {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    /// Play-selected was requested without a list selection.
    #[error("please select a song first")]
    NoSelection,

    /// `play` was called on the controller before anything was loaded.
    #[error("no track loaded")]
    NothingLoaded,

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("could not read directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl PlayerError {
    /// Short title used for the blocking notice box.
    pub fn title(&self) -> &'static str {
        match self {
            Self::MixerInit(_) => "Initialization Error",
            Self::EmptyPlaylist => "No music",
            Self::Load { .. } => "Playback Error",
            Self::NoSelection => "Select Song",
            Self::NothingLoaded => "Player Info",
            Self::NotADirectory(_) | Self::Walk(_) => "Folder Error",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlayerError>;
