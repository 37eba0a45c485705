//! active-window-render — turns parsed events into text.
//!
//! Two renderings, selected by [`OutputFormat`]:
//!
//! - [`pretty`]: one `Kind(field=value, ...)` line per event.
//! - [`json`]: a single JSON array; timestamps become epoch seconds.
//!
//! Callers collect the whole sequence first so a parse error never leaves
//! half-written output behind.

pub mod json;
pub mod pretty;

use std::io::Write;

use active_window_core::config::{OutputConfig, OutputFormat};
use active_window_core::WindowEvent;

/// Write `events` to `out` in the configured format.
pub fn write_events<W: Write>(
    events: &[WindowEvent],
    cfg: &OutputConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    match cfg.format {
        OutputFormat::Pretty => {
            for event in events {
                writeln!(out, "{}", pretty::line(event, &cfg.timestamp_format)?)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", json::render(events)?)?;
        }
    }
    out.flush()?;
    Ok(())
}
