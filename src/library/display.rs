use std::path::Path;

use crate::config::TrackDisplayField;

/// Build the display string for a track from its path.
///
/// Falls back to the full path when the requested component is missing or
/// not valid UTF-8.
pub fn display_from_field(path: &Path, field: TrackDisplayField) -> String {
    let part = match field {
        TrackDisplayField::FileName => path.file_name().and_then(|s| s.to_str()),
        TrackDisplayField::Stem => path.file_stem().and_then(|s| s.to_str()),
        TrackDisplayField::Path => None,
    };

    match part.map(str::trim).filter(|s| !s.is_empty()) {
        Some(p) => p.to_string(),
        None => path.display().to_string(),
    }
}
