//! Folder picker: a small directory browser that walks the filesystem one
//! level at a time and hands back the folder the user settles on.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{PlayerError, Result};

pub struct FolderBrowser {
    dir: PathBuf,
    entries: Vec<PathBuf>,
    cursor: usize,
    include_hidden: bool,
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Immediate subdirectories of `dir`, sorted by name (case-insensitive).
fn list_subdirs(dir: &Path, include_hidden: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(PlayerError::NotADirectory(dir.to_path_buf()));
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(_) => continue,
        };
        let path = entry.path();
        if entry.file_type().is_dir() && (include_hidden || !is_hidden(path)) {
            dirs.push(path.to_path_buf());
        }
    }

    dirs.sort_by_key(|p| {
        p.file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
    Ok(dirs)
}

impl FolderBrowser {
    /// Start browsing at `dir`. Relative paths are resolved against the
    /// working directory so the browser can always climb to the root.
    pub fn open(dir: &Path, include_hidden: bool) -> Result<Self> {
        let dir = std::path::absolute(dir)
            .map_err(|_| PlayerError::NotADirectory(dir.to_path_buf()))?;
        let entries = list_subdirs(&dir, include_hidden)?;
        Ok(Self {
            dir,
            entries,
            cursor: 0,
            include_hidden,
        })
    }

    /// The folder currently being browsed; this is what gets chosen.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<&Path> {
        self.entries.get(self.cursor).map(PathBuf::as_path)
    }

    pub fn move_down(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + 1) % self.entries.len();
        }
    }

    pub fn move_up(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + self.entries.len() - 1) % self.entries.len();
        }
    }

    /// Step into the highlighted subdirectory. No-op when there is none.
    pub fn descend(&mut self) -> Result<()> {
        let Some(target) = self.selected().map(Path::to_path_buf) else {
            return Ok(());
        };
        self.go_to(target, None)
    }

    /// Step up to the parent directory, keeping the folder we came from highlighted.
    pub fn ascend(&mut self) -> Result<()> {
        let Some(parent) = self
            .dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
        else {
            return Ok(());
        };
        let came_from = self.dir.clone();
        self.go_to(parent, Some(&came_from))
    }

    fn go_to(&mut self, dir: PathBuf, highlight: Option<&Path>) -> Result<()> {
        let entries = list_subdirs(&dir, self.include_hidden)?;
        self.cursor = highlight
            .and_then(|h| entries.iter().position(|e| e == h))
            .unwrap_or(0);
        self.entries = entries;
        self.dir = dir;
        Ok(())
    }
}
