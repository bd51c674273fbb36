//! File-backed logging. The terminal belongs to the TUI, so nothing is
//! written to stderr once the alternate screen is up.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

use crate::config::{LogSettings, default_log_path};

/// Environment variable that overrides `log.level` using `env_logger` filter syntax.
const LOG_ENV: &str = "CADENCE_LOG";

fn log_path(settings: &LogSettings) -> Option<PathBuf> {
    settings.file.clone().or_else(default_log_path)
}

/// Install the global logger. Returns where logs go, or `None` when logging
/// is off or the file could not be opened.
pub fn init(settings: &LogSettings) -> Option<PathBuf> {
    let level = LevelFilter::from_str(settings.level.trim()).unwrap_or(LevelFilter::Info);
    if level == LevelFilter::Off && std::env::var_os(LOG_ENV).is_none() {
        return None;
    }

    let path = log_path(settings)?;
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("cadence: logging disabled, cannot create {}: {e}", parent.display());
            return None;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("cadence: logging disabled, cannot open {}: {e}", path.display());
            return None;
        }
    };

    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_env(LOG_ENV)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();

    match result {
        Ok(()) => Some(path),
        Err(e) => {
            eprintln!("cadence: logging disabled: {e}");
            None
        }
    }
}
