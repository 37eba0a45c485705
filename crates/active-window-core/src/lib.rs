//! active-window-core — parsing core for ActivityWatch window watcher dumps.
//!
//! Two on-disk formats are normalised into one [`WindowEvent`] sequence:
//!
//! ```text
//! *.csv ──► CsvEvents  ──┐
//!                         ├──► WindowEvents ──► caller
//! other ──► JsonEvents ──┘
//! ```
//!
//! Both readers go through the [`timestamp`] normalizer. [`parse`] picks the
//! reader from the file extension.

pub mod config;
pub mod csv_reader;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod json_reader;
pub mod options;
pub mod timestamp;
pub mod types;

pub use diagnostics::{CollectingSink, DiagnosticSink, DroppedRow, TracingSink};
pub use dispatch::{parse, SourceFormat, WindowEvents};
pub use error::{Error, EventError, Result, RowError, TimestampError};
pub use options::{ErrorPolicy, ParseOptions};
pub use types::{AndroidEvent, ComputerEvent, EventKind, WindowEvent, WindowWatcherEvent};
