//! Human-readable event lines.

use std::fmt::Write;

use active_window_core::WindowEvent;
use anyhow::Context;
use chrono::{DateTime, Utc};

/// Render one event as `Kind(field=value, ...)`.
///
/// `timestamp_format` is a chrono format string; an invalid one is an error.
pub fn line(event: &WindowEvent, timestamp_format: &str) -> anyhow::Result<String> {
    let ts = |t: DateTime<Utc>| -> anyhow::Result<String> {
        let mut s = String::new();
        write!(s, "{}", t.format(timestamp_format))
            .with_context(|| format!("invalid timestamp_format {timestamp_format:?}"))?;
        Ok(s)
    };

    Ok(match event {
        WindowEvent::Computer(e) => format!(
            "ComputerEvent(timestamp={}, duration={:?}, app={:?}, title={:?})",
            ts(e.timestamp)?,
            e.duration,
            e.app,
            e.title
        ),
        WindowEvent::Android(e) => format!(
            "AndroidEvent(timestamp={}, duration={:?}, app={:?}, classname={:?}, package={:?})",
            ts(e.timestamp)?,
            e.duration,
            e.app,
            e.classname,
            e.package
        ),
        WindowEvent::WindowWatcher(e) => format!(
            "WindowWatcherEvent(timestamp={}, duration={:?}, app={:?}, title={:?})",
            ts(e.timestamp)?,
            e.duration,
            e.app,
            e.title
        ),
    })
}
