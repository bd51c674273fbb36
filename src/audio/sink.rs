//! Utilities for creating `rodio` sinks from track files.
//!
//! Decoding is kept apart from sink creation so a bad file can be rejected
//! without touching the output device.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use crate::error::{PlayerError, Result};

/// Open `path` and set up a decoder for it.
pub(super) fn decode_file(path: &Path) -> Result<Decoder<BufReader<File>>> {
    let load_error = |reason: String| PlayerError::Load {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(|e| load_error(e.to_string()))?;
    Decoder::new(BufReader::new(file)).map_err(|e| load_error(e.to_string()))
}

/// Create a paused `Sink` holding the decoded contents of `path`.
pub(super) fn create_paused_sink(stream: &OutputStream, path: &Path) -> Result<Sink> {
    let source = decode_file(path)?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn undecodable_file_is_a_load_error_for_that_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.mp3");
        fs::write(&path, b"not real audio").unwrap();

        match decode_file(&path) {
            Err(PlayerError::Load { path: p, reason }) => {
                assert_eq!(p, path);
                assert!(!reason.is_empty());
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("garbage bytes decoded"),
        }
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.ogg");

        assert!(matches!(
            decode_file(&path),
            Err(PlayerError::Load { path: p, .. }) if p == path
        ));
    }

    #[test]
    fn load_error_message_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.wav");
        fs::write(&path, b"RIFF").unwrap();

        let Err(err) = decode_file(&path) else {
            panic!("truncated wav decoded");
        };
        assert_eq!(err.title(), "Playback Error");
        assert!(err.to_string().contains("broken.wav"));
    }
}
