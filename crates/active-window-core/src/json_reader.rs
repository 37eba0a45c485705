//! JSON bucket reader.
//!
//! Reads a bucket dump shaped as `{"buckets": {id: {"events": [...]}}}`.
//! The whole document is loaded up front; events are converted lazily.
//!
//! Each bucket is classified once, from its first event's `data` keys, and
//! every event in it is then read with that shape. A later event that lacks
//! a key the bucket promised is a fatal [`Error::Event`], not a skip.
//! Buckets that cannot be classified are passed over silently.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, EventError, Result};
use crate::timestamp::parse_iso8601;
use crate::types::{AndroidEvent, ComputerEvent, WindowEvent};

/// Shape of the events in a recognised bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKind {
    /// Desktop window watcher: `data` has `app` and `title`.
    Computer,
    /// Android watcher: `data` has `app`, `classname` and `package`.
    Android,
}

impl std::fmt::Display for BucketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BucketKind::Computer => write!(f, "computer"),
            BucketKind::Android => write!(f, "android"),
        }
    }
}

/// Classify a bucket from its first event, or `None` if it is not a window
/// watcher bucket.
pub fn classify_bucket(bucket: &Value) -> Option<BucketKind> {
    let first = bucket.get("events")?.as_array()?.first()?;
    let data = first.get("data")?.as_object()?;
    if !data.contains_key("app") {
        return None;
    }
    if data.contains_key("title") {
        Some(BucketKind::Computer)
    } else if data.contains_key("classname") && data.contains_key("package") {
        Some(BucketKind::Android)
    } else {
        None
    }
}

struct Bucket {
    id: String,
    kind: BucketKind,
    events: std::iter::Enumerate<std::vec::IntoIter<Value>>,
}

/// Lazy sequence of events from one JSON bucket dump.
pub struct JsonEvents {
    path: PathBuf,
    buckets: serde_json::map::IntoIter,
    current: Option<Bucket>,
    done: bool,
}

impl JsonEvents {
    /// Read and parse `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_contents(path, &contents)
    }

    /// Parse an in-memory dump; `path` is used in errors only.
    pub fn from_contents(path: impl Into<PathBuf>, contents: &str) -> Result<Self> {
        let path = path.into();
        match serde_json::from_str(contents) {
            Ok(root) => Self::from_value(path, root),
            Err(source) => Err(Error::Json { path, source }),
        }
    }

    /// Walk an already parsed dump.
    pub fn from_value(path: impl Into<PathBuf>, root: Value) -> Result<Self> {
        let path = path.into();
        let buckets = match root {
            Value::Object(mut map) => match map.remove("buckets") {
                Some(Value::Object(buckets)) => buckets,
                _ => return Err(Error::MissingBuckets { path }),
            },
            _ => return Err(Error::MissingBuckets { path }),
        };

        Ok(Self {
            path,
            buckets: buckets.into_iter(),
            current: None,
            done: false,
        })
    }

    fn next_bucket(&mut self) -> Option<Bucket> {
        loop {
            let (id, value) = self.buckets.next()?;
            let Some(kind) = classify_bucket(&value) else {
                continue;
            };
            let Value::Object(mut body) = value else {
                continue;
            };
            let Some(Value::Array(events)) = body.remove("events") else {
                continue;
            };
            tracing::trace!(bucket = %id, %kind, events = events.len(), "classified bucket");
            return Some(Bucket {
                id,
                kind,
                events: events.into_iter().enumerate(),
            });
        }
    }
}

impl Iterator for JsonEvents {
    type Item = Result<WindowEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(bucket) = &mut self.current {
                if let Some((index, event)) = bucket.events.next() {
                    let result =
                        convert_event(bucket.kind, &event).map_err(|source| Error::Event {
                            path: self.path.clone(),
                            bucket: bucket.id.clone(),
                            index,
                            source,
                        });
                    if result.is_err() {
                        self.done = true;
                    }
                    return Some(result);
                }
            }
            self.current = Some(self.next_bucket()?);
        }
    }
}

impl std::iter::FusedIterator for JsonEvents {}

/// Convert one event using the shape its bucket was classified as.
pub fn convert_event(
    kind: BucketKind,
    event: &Value,
) -> std::result::Result<WindowEvent, EventError> {
    let data = field(event, "data")?;
    let timestamp = parse_iso8601(str_field(event, "timestamp")?)?;
    let duration = field(event, "duration")?
        .as_f64()
        .ok_or(EventError::WrongType {
            key: "duration",
            expected: "number",
        })?;
    let app = str_field(data, "app")?.to_owned();

    Ok(match kind {
        BucketKind::Computer => ComputerEvent {
            timestamp,
            duration,
            app,
            title: str_field(data, "title")?.to_owned(),
        }
        .into(),
        BucketKind::Android => AndroidEvent {
            timestamp,
            duration,
            app,
            package: str_field(data, "package")?.to_owned(),
            classname: str_field(data, "classname")?.to_owned(),
        }
        .into(),
    })
}

fn field<'v>(value: &'v Value, key: &'static str) -> std::result::Result<&'v Value, EventError> {
    value.get(key).ok_or(EventError::MissingKey(key))
}

fn str_field<'v>(value: &'v Value, key: &'static str) -> std::result::Result<&'v str, EventError> {
    field(value, key)?.as_str().ok_or(EventError::WrongType {
        key,
        expected: "string",
    })
}
