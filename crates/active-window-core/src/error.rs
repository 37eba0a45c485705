//! Error types for active-window-core.
//!
//! [`Error`] is what the readers yield. It always names the dump file; row
//! and event level detail hangs off it as a [`RowError`] or [`EventError`].

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error returned by [`crate::parse`] and yielded by its iterator.
#[derive(Error, Debug)]
pub enum Error {
    /// The dump file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON dump is not valid JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON dump has no top-level `buckets` object.
    #[error("{}: missing top-level \"buckets\" object", .path.display())]
    MissingBuckets { path: PathBuf },

    /// A CSV row was malformed and the error policy is `raise`.
    #[error("error parsing {} line {line} {row:?}: {source}", .path.display())]
    Row {
        path: PathBuf,
        line: u64,
        row: Vec<String>,
        #[source]
        source: RowError,
    },

    /// An event in a classified JSON bucket does not match the bucket's shape.
    #[error("error parsing {} bucket {bucket:?} event {index}: {source}", .path.display())]
    Event {
        path: PathBuf,
        bucket: String,
        index: usize,
        #[source]
        source: EventError,
    },
}

impl Error {
    /// The dump file this error came from.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Io { path, .. }
            | Error::Json { path, .. }
            | Error::MissingBuckets { path }
            | Error::Row { path, .. }
            | Error::Event { path, .. } => path,
        }
    }
}

/// Why a CSV row could not become a [`crate::WindowWatcherEvent`].
#[derive(Error, Debug)]
pub enum RowError {
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] TimestampError),

    #[error("invalid duration {value:?}")]
    Duration { value: String },

    #[error("missing column {index}")]
    MissingColumn { index: usize },

    #[error("line contains NUL")]
    NulByte,

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Why an event in a classified bucket could not be converted.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("missing key {0:?}")]
    MissingKey(&'static str),

    #[error("key {key:?} is not a {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] TimestampError),
}

/// Failure to turn a raw value into a UTC instant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimestampError {
    #[error("{input:?} is not an ISO-8601 date-time")]
    InvalidIso { input: String },

    #[error("{input:?} is not a number of epoch seconds")]
    InvalidEpoch { input: String },

    #[error("{seconds} epoch seconds is out of range")]
    OutOfRange { seconds: i64 },
}
