//! Application model types: `App` and `Notice`.

use std::collections::VecDeque;
use std::path::PathBuf;

use log::debug;

use crate::audio::AudioOutput;
use crate::browser::FolderBrowser;
use crate::error::{PlayerError, Result};
use crate::playlist::{next_index, previous_index};
use crate::session::{Session, Transport};

/// A blocking message box: shown until the user dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl From<&PlayerError> for Notice {
    fn from(err: &PlayerError) -> Self {
        Self {
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

/// The main application model.
pub struct App<O> {
    pub session: Session<O>,
    /// Highlighted row in the track list. `None` until the user moves onto the list.
    pub cursor: Option<usize>,
    pub browser: Option<FolderBrowser>,
    /// Where the folder browser opens when no folder has been chosen yet.
    pub browse_start: PathBuf,
    include_hidden: bool,
    notices: VecDeque<Notice>,
}

impl<O: AudioOutput> App<O> {
    pub fn new(session: Session<O>, browse_start: PathBuf, include_hidden: bool) -> Self {
        Self {
            session,
            cursor: None,
            browser: None,
            browse_start,
            include_hidden,
            notices: VecDeque::new(),
        }
    }

    /// The notice currently blocking input, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    pub fn notify(&mut self, err: &PlayerError) {
        debug!("notice: {err}");
        self.notices.push_back(Notice::from(err));
    }

    /// Surface the outcome of a session call: tracks dropped along the way
    /// first, then the call's own error.
    fn report(&mut self, result: Result<()>) {
        for err in self.session.take_reports() {
            self.notify(&err);
        }
        if let Err(err) = result {
            self.notify(&err);
        }
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let len = self.session.playlist().len();
        self.cursor = match self.cursor {
            _ if len == 0 => None,
            Some(c) if c >= len => Some(len - 1),
            other => other,
        };
    }

    pub fn transport(&mut self, action: Transport) {
        let result = self.session.dispatch(action);
        self.report(result);
    }

    pub fn play_selected(&mut self) {
        let result = self.session.play_selected(self.cursor);
        self.report(result);
    }

    /// Poll-loop tick: let the session advance past a finished track.
    pub fn tick(&mut self) {
        let result = self.session.check_track_end().map(|_| ());
        self.report(result);
    }

    pub fn cursor_down(&mut self) {
        let len = self.session.playlist().len();
        self.cursor = match self.cursor {
            None if len > 0 => Some(0),
            None => None,
            Some(c) => next_index(len, c).ok(),
        };
    }

    pub fn cursor_up(&mut self) {
        let len = self.session.playlist().len();
        self.cursor = match self.cursor {
            None => len.checked_sub(1),
            Some(c) => previous_index(len, c).ok(),
        };
    }

    /// Open the folder picker at the current folder, or at the start directory.
    pub fn open_browser(&mut self) {
        let start = self
            .session
            .folder()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| self.browse_start.clone());

        match FolderBrowser::open(&start, self.include_hidden) {
            Ok(browser) => self.browser = Some(browser),
            Err(err) => self.notify(&err),
        }
    }

    pub fn close_browser(&mut self) {
        self.browser = None;
    }

    pub fn browser_descend(&mut self) {
        if let Some(result) = self.browser.as_mut().map(FolderBrowser::descend) {
            self.report(result);
        }
    }

    pub fn browser_ascend(&mut self) {
        if let Some(result) = self.browser.as_mut().map(FolderBrowser::ascend) {
            self.report(result);
        }
    }

    /// Close the picker and build a new playlist from the folder it shows.
    pub fn choose_browsed_folder(&mut self) {
        let Some(browser) = self.browser.take() else {
            return;
        };
        let dir = browser.dir().to_path_buf();
        let result = self.session.open_folder(&dir);
        self.browse_start = dir;
        self.cursor = None;
        self.report(result);
    }
}
