use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_cadence_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("CADENCE_CONFIG_PATH", "/tmp/cadence-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/cadence-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("cadence")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("cadence")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_uses_xdg_state_home_then_local_state() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_STATE_HOME", "/tmp/xdg-state");
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-state/cadence/cadence.log")
    );

    let _g2 = EnvGuard::remove("XDG_STATE_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/cadence/cadence.log")
    );
}

#[test]
fn defaults_cover_a_plain_folder_player() {
    let s = Settings::default();
    assert_eq!(s.audio.poll_interval_ms, 1000);
    assert_eq!(s.library.extensions, vec!["mp3", "wav", "ogg"]);
    assert!(s.playback.autoplay_on_select);
    assert_eq!(s.ui.track_field, TrackDisplayField::FileName);
    assert_eq!(s.log.level, "info");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
poll_interval_ms = 250

[playback]
autoplay_on_select = false

[ui]
header_text = "hello"
show_elapsed = false
track_field = "stem"

[library]
extensions = ["mp3", "wav"]
include_hidden = false
follow_links = false

[log]
level = "debug"
file = "/tmp/cadence-test.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CADENCE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CADENCE__AUDIO__POLL_INTERVAL_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.poll_interval_ms, 250);
    assert!(!s.playback.autoplay_on_select);
    assert_eq!(s.ui.header_text, "hello");
    assert!(!s.ui.show_elapsed);
    assert_eq!(s.ui.track_field, TrackDisplayField::Stem);
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "wav".to_string()]);
    assert!(!s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert_eq!(s.log.level, "debug");
    assert_eq!(
        s.log.file.as_deref(),
        Some(std::path::Path::new("/tmp/cadence-test.log"))
    );
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
poll_interval_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CADENCE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("CADENCE__AUDIO__POLL_INTERVAL_MS", "500");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.poll_interval_ms, 500);
}

#[test]
fn load_or_default_falls_back_on_invalid_values() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
poll_interval_ms = 0

[ui]
header_text = "ignored"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CADENCE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CADENCE__AUDIO__POLL_INTERVAL_MS");

    let (s, warning) = Settings::load_or_default();
    assert_eq!(s.audio.poll_interval_ms, AudioSettings::default().poll_interval_ms);
    assert_eq!(s.ui.header_text, UiSettings::default().header_text);
    let warning = warning.unwrap();
    assert!(warning.starts_with("invalid config"), "{warning}");
    assert!(warning.contains("poll_interval_ms"), "{warning}");
}

#[test]
fn load_or_default_falls_back_on_malformed_toml() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[audio\npoll_interval_ms = ").unwrap();

    let _g1 = EnvGuard::set("CADENCE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CADENCE__AUDIO__POLL_INTERVAL_MS");

    let (s, warning) = Settings::load_or_default();
    assert_eq!(s.audio.poll_interval_ms, AudioSettings::default().poll_interval_ms);
    assert!(warning.unwrap().starts_with("failed to load config"));
}

#[test]
fn load_or_default_is_quiet_for_a_valid_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[audio]\npoll_interval_ms = 300\n").unwrap();

    let _g1 = EnvGuard::set("CADENCE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CADENCE__AUDIO__POLL_INTERVAL_MS");

    let (s, warning) = Settings::load_or_default();
    assert_eq!(s.audio.poll_interval_ms, 300);
    assert!(warning.is_none());
}

#[test]
fn validate_rejects_zero_interval_empty_extensions_and_bad_level() {
    let mut s = Settings::default();
    s.audio.poll_interval_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions = vec![".".into(), "  ".into()];
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.log.level = "loud".into();
    assert!(s.validate().is_err());
}
