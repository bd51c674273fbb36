//! The player session: one playlist, one playback controller, and the
//! transport actions that tie them together.
//!
//! Every path that ends up loading a file goes through [`Session::start_current`],
//! which drops unloadable entries and moves on to the next one instead of
//! giving up on the whole folder.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};

use crate::audio::{AudioOutput, PlaybackController, PlaybackState};
use crate::config::{LibrarySettings, PlaybackSettings};
use crate::error::{PlayerError, Result};
use crate::library::{Track, scan};
use crate::playlist::Playlist;

/// The fixed set of transport controls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transport {
    Play,
    Pause,
    Next,
    Previous,
    Stop,
}

pub struct Session<O> {
    playlist: Playlist,
    controller: PlaybackController<O>,
    folder: Option<PathBuf>,
    library: LibrarySettings,
    playback: PlaybackSettings,
    /// Load failures hit while skipping over broken files, oldest first.
    reports: Vec<PlayerError>,
}

impl<O: AudioOutput> Session<O> {
    pub fn new(output: O, library: LibrarySettings, playback: PlaybackSettings) -> Self {
        Self {
            playlist: Playlist::default(),
            controller: PlaybackController::new(output),
            folder: None,
            library,
            playback,
            reports: Vec::new(),
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn state(&self) -> PlaybackState {
        self.controller.state()
    }

    pub fn position(&self) -> Duration {
        self.controller.position()
    }

    /// The track the controller currently has loaded, if it is still in the playlist.
    pub fn now_playing(&self) -> Option<&Track> {
        let loaded = self.controller.loaded()?;
        self.playlist
            .current_track()
            .filter(|t| t.path.as_path() == loaded)
    }

    /// Drain the load errors recorded since the last call.
    pub fn take_reports(&mut self) -> Vec<PlayerError> {
        std::mem::take(&mut self.reports)
    }

    /// Replace the playlist with the contents of `dir`.
    ///
    /// A folder without playable files, or whose files all fail to load,
    /// stops playback and forgets both the old playlist and the remembered
    /// folder. A folder that cannot be read
    /// at all leaves everything as it was.
    pub fn open_folder(&mut self, dir: &Path) -> Result<()> {
        match scan(dir, &self.library) {
            Ok(tracks) => {
                self.controller.stop();
                self.playlist = Playlist::new(tracks);
                self.folder = Some(dir.to_path_buf());
                info!(
                    "opened {} with {} tracks",
                    dir.display(),
                    self.playlist.len()
                );
                if self.playback.autoplay_on_select {
                    self.start_current()?;
                }
                Ok(())
            }
            Err(PlayerError::EmptyPlaylist) => {
                warn!("{} has no playable files", dir.display());
                self.controller.stop();
                self.playlist = Playlist::default();
                self.folder = None;
                Err(PlayerError::EmptyPlaylist)
            }
            Err(e) => {
                warn!("could not open {}: {e}", dir.display());
                Err(e)
            }
        }
    }

    pub fn dispatch(&mut self, action: Transport) -> Result<()> {
        info!("transport: {action:?}");
        match action {
            Transport::Play => self.play(),
            Transport::Pause => {
                self.controller.pause();
                Ok(())
            }
            Transport::Next => self.next(),
            Transport::Previous => self.previous(),
            Transport::Stop => {
                self.controller.stop();
                Ok(())
            }
        }
    }

    /// Resume when paused, keep going when playing, otherwise start the
    /// current track from the top.
    pub fn play(&mut self) -> Result<()> {
        if self.playlist.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        match self.controller.state() {
            PlaybackState::Paused => self.controller.play(),
            PlaybackState::Playing => Ok(()),
            PlaybackState::Idle => self.start_current(),
        }
    }

    pub fn next(&mut self) -> Result<()> {
        self.playlist.advance()?;
        self.start_current()
    }

    pub fn previous(&mut self) -> Result<()> {
        self.playlist.retreat()?;
        self.start_current()
    }

    /// Play the entry highlighted in the track list.
    pub fn play_selected(&mut self, selection: Option<usize>) -> Result<()> {
        let Some(index) = selection else {
            return Err(PlayerError::NoSelection);
        };
        if self.playlist.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        self.playlist.select(index)?;
        self.start_current()
    }

    /// Poll-loop body: advance when the current track has run out.
    ///
    /// Only a controller that still believes it is `Playing` while the
    /// output has gone quiet counts as a natural end; paused and stopped
    /// sessions are left alone. Returns whether an advance happened.
    pub fn check_track_end(&mut self) -> Result<bool> {
        if self.playlist.is_empty()
            || self.controller.state() != PlaybackState::Playing
            || self.controller.is_busy()
        {
            return Ok(false);
        }

        info!("track finished, advancing");
        self.next()?;
        Ok(true)
    }

    /// Load and play the current entry, dropping entries that fail to load
    /// until one plays or the playlist runs dry. A dry playlist also forgets
    /// the folder it came from.
    fn start_current(&mut self) -> Result<()> {
        loop {
            let Some(path) = self.playlist.current_track().map(|t| t.path.clone()) else {
                self.controller.stop();
                return Err(PlayerError::EmptyPlaylist);
            };

            let started = self
                .controller
                .load(&path)
                .and_then(|()| self.controller.play());

            match started {
                Ok(()) => {
                    info!("now playing {}", path.display());
                    return Ok(());
                }
                Err(err @ PlayerError::Load { .. }) => {
                    warn!("dropping unplayable track: {err}");
                    self.reports.push(err);
                    if let Err(e) = self.playlist.remove_current() {
                        warn!("every track failed to load, forgetting the folder");
                        self.controller.stop();
                        self.folder = None;
                        return Err(e);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &PlaybackController<O> {
        &self.controller
    }

    #[cfg(test)]
    pub fn controller_mut(&mut self) -> &mut PlaybackController<O> {
        &mut self.controller
    }
}
