//! Tests for the reload manager.

use super::*;
use crate::schema::EditorConfig;
use crate::watcher::{BackendKind, WatchOptions};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

fn fast() -> WatchOptions {
    WatchOptions {
        backend: BackendKind::Native,
        poll_timeout_ms: 50,
        retry_delay_ms: Some(50),
    }
}

fn append(path: &Path, line: &str) {
    let mut file = fs::OpenOptions::new().append(true).open(path).unwrap();
    writeln!(file, "{line}").unwrap();
}

/// Keep appending `line` until a tick applies it.
fn tick_until_reloaded(manager: &mut ReloadManager, path: &Path, line: &str) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        append(path, line);
        let settle = Instant::now() + Duration::from_millis(300);
        while Instant::now() < settle {
            if manager.tick() {
                return true;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }
    false
}

#[test]
fn start_with_nonexistent_path_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.ini");
    let mut manager = ReloadManager::start_with_options(&path, fast());

    assert_eq!(*manager.config(), EditorConfig::default());
    assert_eq!(manager.generation(), 0);
    assert!(!manager.tick());
    manager.stop();
}

#[test]
fn start_with_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");
    fs::write(&path, "font_family = Fira Code\ntab_width = 8\n").unwrap();

    let manager = ReloadManager::start_with_options(&path, fast());
    assert_eq!(manager.config().font.family, "Fira Code");
    assert_eq!(manager.config().preference.tab_width, 8);
    assert_eq!(manager.config().font.size, 14);
    assert!(manager.is_watching());
}

#[test]
fn narrow_tab_width_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");
    fs::write(&path, "hot_reload = false\ntab_width = 2\n").unwrap();

    let manager = ReloadManager::start_with_options(&path, fast());
    assert_eq!(manager.config().preference.tab_width, 4);
}

#[test]
fn hot_reload_off_means_no_watcher() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");
    fs::write(&path, "hot_reload = false\nfont_size = 14\n").unwrap();

    let mut manager = ReloadManager::start_with_options(&path, fast());
    assert!(!manager.is_watching());

    append(&path, "font_size = 20");
    thread::sleep(Duration::from_millis(300));
    assert!(!manager.tick());
    assert_eq!(manager.config().font.size, 14);
}

#[test]
fn edited_font_size_is_applied_on_next_tick() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");
    fs::write(&path, "font_size = 14\nfont_family = Iosevka\n").unwrap();

    let mut manager = ReloadManager::start_with_options(&path, fast());
    assert_eq!(manager.config().font.size, 14);

    assert!(tick_until_reloaded(&mut manager, &path, "font_size = 20"));
    assert_eq!(manager.config().font.size, 20);
    assert_eq!(manager.config().font.family, "Iosevka");
    assert!(manager.generation() >= 1);
    manager.stop();
}

#[test]
fn bad_value_on_reload_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");
    fs::write(&path, "tab_width = 8\n").unwrap();

    let mut manager = ReloadManager::start_with_options(&path, fast());
    assert_eq!(manager.config().preference.tab_width, 8);

    assert!(tick_until_reloaded(&mut manager, &path, "tab_width = wide"));
    assert_eq!(manager.config().preference.tab_width, 4);
}

#[test]
fn reload_now_bumps_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");
    fs::write(&path, "hot_reload = false\n").unwrap();
    let mut manager = ReloadManager::start_with_options(&path, fast());

    fs::write(&path, "hot_reload = false\nvim_mode = true\n").unwrap();
    let report = manager.reload_now().unwrap();
    assert_eq!(report.applied, 2);
    assert!(manager.config().input.vim_mode);
    assert_eq!(manager.generation(), 1);
}

#[test]
fn reload_now_of_deleted_file_keeps_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("config.ini");
    fs::write(&path, "hot_reload = false\nui_scale = 150\n").unwrap();
    let mut manager = ReloadManager::start_with_options(&path, fast());

    fs::remove_file(&path).unwrap();
    assert!(matches!(
        manager.reload_now(),
        Err(blip_common::ConfigError::FileNotFound(_))
    ));
    assert_eq!(manager.config().ui.ui_scale, 150);
    assert_eq!(manager.generation(), 0);
    assert_eq!(manager.path(), path.as_path());
}
