//! Per-call parse options.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::config::ParseConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};

/// What the CSV reader does with a malformed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Yield an error naming the file and row, then stop.
    Raise,
    /// Skip the row and keep going.
    #[default]
    Drop,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Raise => write!(f, "raise"),
            ErrorPolicy::Drop => write!(f, "drop"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error policy {0:?} (expected \"raise\" or \"drop\")")]
pub struct UnknownErrorPolicy(String);

impl FromStr for ErrorPolicy {
    type Err = UnknownErrorPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" => Ok(ErrorPolicy::Raise),
            "drop" => Ok(ErrorPolicy::Drop),
            _ => Err(UnknownErrorPolicy(s.to_string())),
        }
    }
}

/// Options for a single [`crate::parse`] call.
///
/// Both fields only affect CSV input; the JSON reader has no error policy.
#[derive(Clone, Default)]
pub struct ParseOptions {
    pub error_policy: ErrorPolicy,
    pub sink: Option<Arc<dyn DiagnosticSink>>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Options described by the `[parse]` config section.
    pub fn from_config(cfg: &ParseConfig) -> Self {
        let options = Self::new().error_policy(cfg.error_policy);
        if cfg.log_dropped_rows {
            options.sink(TracingSink)
        } else {
            options
        }
    }
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("error_policy", &self.error_policy)
            .field("sink", &self.sink.as_ref().map(|_| "<sink>"))
            .finish()
    }
}
