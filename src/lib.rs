//! active-window — parse the output of ActivityWatch window watchers.
//!
//! The binary is a thin shell: it loads [`Config`], turns the `parse`
//! subcommand's flags into [`ParseOptions`], pulls every event from
//! [`active_window_core::parse`], and hands the result to
//! [`active_window_render`].
//!
//! # Layers
//!
//! ```text
//! CLI ──► active-window-core (dispatch ─► csv / json readers) ──► active-window-render
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;

pub use active_window_core::config::{Config, OutputFormat};
pub use active_window_core::{
    parse, AndroidEvent, ComputerEvent, ErrorPolicy, EventKind, ParseOptions, WindowEvent,
    WindowWatcherEvent,
};

/// Arguments of `active_window parse`.
#[derive(Debug, Clone, clap::Args)]
pub struct ParseArgs {
    /// Print result to STDOUT as JSON.
    #[arg(short, long)]
    pub json: bool,

    /// What to do with malformed CSV rows: raise or drop.
    #[arg(long, value_name = "POLICY")]
    pub error_policy: Option<ErrorPolicy>,

    /// A JSON bucket export or a window_watcher CSV file.
    #[arg(value_name = "DUMP")]
    pub dump: PathBuf,
}

/// Parse `args.dump` and render every event to `out`.
///
/// Flags win over `cfg`. Returns the number of events written.
pub fn run_parse<W: Write>(
    args: &ParseArgs,
    mut cfg: Config,
    out: &mut W,
) -> anyhow::Result<usize> {
    if let Some(policy) = args.error_policy {
        cfg.parse.error_policy = policy;
    }
    if args.json {
        cfg.output.format = OutputFormat::Json;
    }

    let options = ParseOptions::from_config(&cfg.parse);
    let events = parse(&args.dump, &options)?
        .collect::<active_window_core::Result<Vec<_>>>()
        .with_context(|| format!("could not parse {}", args.dump.display()))?;

    tracing::info!(
        path = %args.dump.display(),
        events = events.len(),
        format = ?cfg.output.format,
        "parsed dump"
    );
    active_window_render::write_events(&events, &cfg.output, out)?;
    Ok(events.len())
}
