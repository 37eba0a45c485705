//! Core event types for active-window-core.
//!
//! Three record shapes come out of the readers: [`ComputerEvent`] and
//! [`AndroidEvent`] from JSON bucket dumps, [`WindowWatcherEvent`] from the
//! legacy CSV watcher log. [`WindowEvent`] is the closed union callers match on.

use chrono::{DateTime, Utc};

/// A window focus event recorded by the desktop window watcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputerEvent {
    pub timestamp: DateTime<Utc>,
    /// Seconds the window held focus. Not validated; may be negative.
    pub duration: f64,
    pub app: String,
    pub title: String,
}

/// An app usage event recorded by the Android watcher.
#[derive(Debug, Clone, PartialEq)]
pub struct AndroidEvent {
    pub timestamp: DateTime<Utc>,
    pub duration: f64,
    pub app: String,
    pub classname: String,
    pub package: String,
}

/// A row from the CSV window watcher log.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowWatcherEvent {
    /// Whole seconds; the log's sub-second precision is discarded.
    pub timestamp: DateTime<Utc>,
    pub duration: f64,
    pub app: String,
    pub title: String,
}

/// Any record produced by [`crate::parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    Computer(ComputerEvent),
    Android(AndroidEvent),
    WindowWatcher(WindowWatcherEvent),
}

impl WindowEvent {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            WindowEvent::Computer(e) => e.timestamp,
            WindowEvent::Android(e) => e.timestamp,
            WindowEvent::WindowWatcher(e) => e.timestamp,
        }
    }

    pub fn duration(&self) -> f64 {
        match self {
            WindowEvent::Computer(e) => e.duration,
            WindowEvent::Android(e) => e.duration,
            WindowEvent::WindowWatcher(e) => e.duration,
        }
    }

    pub fn app(&self) -> &str {
        match self {
            WindowEvent::Computer(e) => &e.app,
            WindowEvent::Android(e) => &e.app,
            WindowEvent::WindowWatcher(e) => &e.app,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            WindowEvent::Computer(_) => EventKind::Computer,
            WindowEvent::Android(_) => EventKind::Android,
            WindowEvent::WindowWatcher(_) => EventKind::WindowWatcher,
        }
    }
}

impl From<ComputerEvent> for WindowEvent {
    fn from(e: ComputerEvent) -> Self {
        WindowEvent::Computer(e)
    }
}

impl From<AndroidEvent> for WindowEvent {
    fn from(e: AndroidEvent) -> Self {
        WindowEvent::Android(e)
    }
}

impl From<WindowWatcherEvent> for WindowEvent {
    fn from(e: WindowWatcherEvent) -> Self {
        WindowEvent::WindowWatcher(e)
    }
}

/// Which shape a [`WindowEvent`] has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Computer,
    Android,
    WindowWatcher,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Computer => write!(f, "computer"),
            EventKind::Android => write!(f, "android"),
            EventKind::WindowWatcher => write!(f, "window_watcher"),
        }
    }
}
