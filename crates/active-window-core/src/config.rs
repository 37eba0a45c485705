//! Configuration types for active-window.
//!
//! [`Config::load`] layers `~/.config/active-window/config.toml` (if present)
//! and an optional explicit file over the built-in defaults.
//! [`Config::defaults`] returns the defaults without touching the filesystem.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::options::ErrorPolicy;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[parse]
error_policy     = "drop"
log_dropped_rows = true

[output]
format           = "pretty"
timestamp_format = "%Y-%m-%dT%H:%M:%SZ"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parse: ParseConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[parse]` section of `config.toml`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ParseConfig {
    #[serde(default)]
    pub error_policy: ErrorPolicy,
    /// Report rows dropped under the `drop` policy through `tracing`.
    #[serde(default = "default_log_dropped_rows")]
    pub log_dropped_rows: bool,
}

fn default_log_dropped_rows() -> bool { true }

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::default(),
            log_dropped_rows: default_log_dropped_rows(),
        }
    }
}

/// How parsed events are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// chrono format string for timestamps in pretty output.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_timestamp_format() -> String { "%Y-%m-%dT%H:%M:%SZ".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the user config file (if any), then `extra` (which must exist),
    /// layered on top of the built-in defaults.
    pub fn load(extra: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(config_path().as_path()).required(false));

        if let Some(path) = extra {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("active-window")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
