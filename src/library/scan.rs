use std::path::Path;

use log::{debug, info};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::{PlayerError, Result};

use super::model::Track;

/// Exact, case-sensitive extension match against the configured allow-list.
fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };

    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.'))
        .filter(|e| !e.is_empty())
        .any(|e| e == ext)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List the playable files directly inside `dir`.
///
/// Subdirectories are not entered. Tracks come back in the order the
/// filesystem enumerates them; nothing is sorted. A folder without a single
/// matching file is reported as [`PlayerError::EmptyPlaylist`].
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Track>> {
    if !dir.is_dir() {
        return Err(PlayerError::NotADirectory(dir.to_path_buf()));
    }

    let walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .min_depth(1)
        .max_depth(1);

    let mut tracks: Vec<Track> = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Failing to open the folder itself is fatal for the scan; a single
            // unreadable entry (e.g. a dangling symlink) is just skipped.
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                debug!("skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            tracks.push(Track::new(path.to_path_buf()));
        }
    }

    if tracks.is_empty() {
        info!("no playable files in {}", dir.display());
        return Err(PlayerError::EmptyPlaylist);
    }

    info!("scanned {}: {} tracks", dir.display(), tracks.len());
    Ok(tracks)
}
