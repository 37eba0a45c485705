//! CSV event reader for the legacy window watcher log.
//!
//! Rows are `epoch_seconds,duration,app,title` with no header. The file is
//! read once, carriage returns are stripped, and records are decoded lazily
//! as the iterator is pulled.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::StringRecord;

use crate::diagnostics::{DiagnosticSink, DroppedRow};
use crate::error::{Error, Result, RowError};
use crate::options::{ErrorPolicy, ParseOptions};
use crate::timestamp::from_epoch_seconds;
use crate::types::WindowWatcherEvent;

/// Lazy sequence of [`WindowWatcherEvent`]s from one CSV file.
pub struct CsvEvents {
    path: PathBuf,
    records: csv::StringRecordsIntoIter<Cursor<Vec<u8>>>,
    policy: ErrorPolicy,
    sink: Option<Arc<dyn DiagnosticSink>>,
    done: bool,
}

impl CsvEvents {
    /// Read `path` and prepare to decode its rows.
    pub fn open(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_contents(path, contents, options))
    }

    /// Decode rows from in-memory `contents`; `path` is used in errors only.
    pub fn from_contents(
        path: impl Into<PathBuf>,
        contents: impl Into<String>,
        options: &ParseOptions,
    ) -> Self {
        let cleaned = contents.into().replace('\r', "");
        let records = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(b',')
            .quote(b'"')
            .from_reader(Cursor::new(cleaned.into_bytes()))
            .into_records();

        Self {
            path: path.into(),
            records,
            policy: options.error_policy,
            sink: options.sink.clone(),
            done: false,
        }
    }

    /// Apply the error policy to a bad row. `Some` ends the sequence.
    fn reject(
        &mut self,
        line: u64,
        row: Vec<String>,
        error: RowError,
    ) -> Option<Result<WindowWatcherEvent>> {
        match self.policy {
            ErrorPolicy::Raise => {
                self.done = true;
                Some(Err(Error::Row {
                    path: self.path.clone(),
                    line,
                    row,
                    source: error,
                }))
            }
            ErrorPolicy::Drop => {
                if let Some(sink) = &self.sink {
                    sink.row_dropped(&DroppedRow {
                        path: &self.path,
                        line,
                        row: &row,
                        error: &error,
                    });
                }
                None
            }
        }
    }
}

impl Iterator for CsvEvents {
    type Item = Result<WindowWatcherEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let rejected = match self.records.next()? {
                Ok(record) => match parse_row(&record) {
                    Ok(event) => return Some(Ok(event)),
                    Err(error) => {
                        let line = record.position().map_or(0, |p| p.line());
                        let row = record.iter().map(str::to_owned).collect();
                        self.reject(line, row, error)
                    }
                },
                Err(error) => {
                    let line = error.position().map_or(0, |p| p.line());
                    self.reject(line, Vec::new(), RowError::Csv(error))
                }
            };
            if rejected.is_some() {
                return rejected;
            }
        }
    }
}

impl std::iter::FusedIterator for CsvEvents {}

/// Decode one CSV record. Columns past the fourth are ignored.
pub fn parse_row(record: &StringRecord) -> std::result::Result<WindowWatcherEvent, RowError> {
    if record.iter().any(|field| field.contains('\0')) {
        return Err(RowError::NulByte);
    }
    let column = |index: usize| record.get(index).ok_or(RowError::MissingColumn { index });

    let timestamp = from_epoch_seconds(column(0)?)?;
    let raw_duration = column(1)?;
    let duration = raw_duration
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite())
        .ok_or_else(|| RowError::Duration {
            value: raw_duration.to_string(),
        })?;

    Ok(WindowWatcherEvent {
        timestamp,
        duration,
        app: column(2)?.to_string(),
        title: column(3)?.to_string(),
    })
}
