//! Diagnostics for rows the CSV reader drops.
//!
//! Under [`ErrorPolicy::Drop`](crate::ErrorPolicy::Drop) malformed rows vanish
//! from the output. A [`DiagnosticSink`] passed through
//! [`ParseOptions`](crate::ParseOptions) hears about each one.

use std::path::Path;

use crate::error::RowError;

/// A CSV row that was skipped.
#[derive(Debug)]
pub struct DroppedRow<'a> {
    pub path: &'a Path,
    /// 1-based line number of the row in the dump (0 if unknown).
    pub line: u64,
    pub row: &'a [String],
    pub error: &'a RowError,
}

/// Receiver for dropped-row notifications.
pub trait DiagnosticSink: Send + Sync {
    fn row_dropped(&self, dropped: &DroppedRow<'_>);
}

/// Keeps an owned copy of every dropped row, mostly useful in tests and for
/// callers that want to summarize what was skipped.
#[derive(Debug, Default)]
pub struct CollectingSink {
    rows: std::sync::Mutex<Vec<DroppedRecord>>,
}

/// Owned form of a [`DroppedRow`].
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedRecord {
    pub line: u64,
    pub row: Vec<String>,
    pub error: String,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything dropped so far, in file order.
    pub fn dropped(&self) -> Vec<DroppedRecord> {
        self.rows.lock().map(|rows| rows.clone()).unwrap_or_default()
    }
}

impl DiagnosticSink for CollectingSink {
    fn row_dropped(&self, dropped: &DroppedRow<'_>) {
        if let Ok(mut rows) = self.rows.lock() {
            rows.push(DroppedRecord {
                line: dropped.line,
                row: dropped.row.to_vec(),
                error: dropped.error.to_string(),
            });
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn row_dropped(&self, dropped: &DroppedRow<'_>) {
        (**self).row_dropped(dropped)
    }
}

/// Reports dropped rows as `tracing` events at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn row_dropped(&self, dropped: &DroppedRow<'_>) {
        tracing::debug!(
            path = %dropped.path.display(),
            line = dropped.line,
            row = ?dropped.row,
            error = %dropped.error,
            "dropped malformed row"
        );
    }
}
