//! Format dispatcher: picks a reader from the file extension.

use std::path::Path;

use crate::csv_reader::CsvEvents;
use crate::error::Result;
use crate::json_reader::JsonEvents;
use crate::options::ParseOptions;
use crate::types::WindowEvent;

/// On-disk dump format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Legacy window watcher CSV log.
    Csv,
    /// Bucket export. Anything that is not `.csv` is read as this.
    Json,
}

impl SourceFormat {
    pub fn detect(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext == "csv" => SourceFormat::Csv,
            _ => SourceFormat::Json,
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "csv"),
            SourceFormat::Json => write!(f, "json"),
        }
    }
}

/// Events from either reader, in file order.
pub enum WindowEvents {
    Csv(CsvEvents),
    Json(JsonEvents),
}

impl WindowEvents {
    pub fn format(&self) -> SourceFormat {
        match self {
            WindowEvents::Csv(_) => SourceFormat::Csv,
            WindowEvents::Json(_) => SourceFormat::Json,
        }
    }
}

impl Iterator for WindowEvents {
    type Item = Result<WindowEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            WindowEvents::Csv(events) => events.next().map(|r| r.map(WindowEvent::from)),
            WindowEvents::Json(events) => events.next(),
        }
    }
}

impl std::iter::FusedIterator for WindowEvents {}

/// Parse a window watcher dump.
///
/// The file is read (and, for JSON, decoded) before this returns; records
/// are produced as the returned iterator is pulled. `options` only applies
/// to CSV input. Call again to restart from the top of the file.
pub fn parse(path: impl AsRef<Path>, options: &ParseOptions) -> Result<WindowEvents> {
    let path = path.as_ref();
    let format = SourceFormat::detect(path);
    tracing::debug!(path = %path.display(), %format, policy = %options.error_policy, "parsing dump");
    match format {
        SourceFormat::Csv => CsvEvents::open(path, options).map(WindowEvents::Csv),
        SourceFormat::Json => JsonEvents::open(path).map(WindowEvents::Json),
    }
}
