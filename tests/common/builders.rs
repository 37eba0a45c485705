//! Test builders — ergonomic constructors for events and dump files.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.
#![allow(dead_code)]

use active_window_core::{AndroidEvent, ComputerEvent, WindowEvent, WindowWatcherEvent};
use chrono::{DateTime, TimeZone, Utc};
use std::path::PathBuf;

/// UTC instant from epoch seconds.
pub fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).single().expect("valid test timestamp")
}

pub fn computer(seconds: i64, duration: f64, app: &str, title: &str) -> WindowEvent {
    WindowEvent::Computer(ComputerEvent {
        timestamp: at(seconds),
        duration,
        app: app.to_string(),
        title: title.to_string(),
    })
}

pub fn android(seconds: i64, duration: f64, app: &str, classname: &str, package: &str) -> WindowEvent {
    WindowEvent::Android(AndroidEvent {
        timestamp: at(seconds),
        duration,
        app: app.to_string(),
        classname: classname.to_string(),
        package: package.to_string(),
    })
}

pub fn watcher(seconds: i64, duration: f64, app: &str, title: &str) -> WindowEvent {
    WindowEvent::WindowWatcher(WindowWatcherEvent {
        timestamp: at(seconds),
        duration,
        app: app.to_string(),
        title: title.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Dump files
// ---------------------------------------------------------------------------

/// A dump written into its own temp directory. The directory lives as long
/// as this value.
pub struct DumpFile {
    _dir: tempfile::TempDir,
    pub path: PathBuf,
}

impl DumpFile {
    /// Write `contents` to a file called `name` in a fresh temp directory.
    pub fn new(name: &str, contents: impl AsRef<[u8]>) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("write dump");
        Self { _dir: dir, path }
    }

    pub fn csv(contents: impl AsRef<[u8]>) -> Self {
        Self::new("aw-watcher-window.csv", contents)
    }

    pub fn json(contents: impl AsRef<[u8]>) -> Self {
        Self::new("aw-buckets-export.json", contents)
    }
}
