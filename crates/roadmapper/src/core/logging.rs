//! Tracing subscriber setup
//!
//! Library code only emits `tracing` events. Binaries and tests call
//! [`init_logging`] once to route them to stderr.
//!
//! ```rust,no_run
//! use roadmapper::core::logging::init_logging;
//!
//! init_logging(Some("roadmapper::painter=trace"), Some("pretty"))?;
//! # Ok::<(), roadmapper::RoadmapError>(())
//! ```
//!
//! Unset arguments are read from `ROADMAPPER_LOG_LEVEL` (then `RUST_LOG`)
//! and `ROADMAPPER_LOG_FORMAT`. Levels accept any `EnvFilter` directive.

use std::fmt as stdfmt;
use std::str::FromStr;

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use super::error::{Result, RoadmapError};

const LEVEL_VAR: &str = "ROADMAPPER_LOG_LEVEL";
const FORMAT_VAR: &str = "ROADMAPPER_LOG_FORMAT";
const DEFAULT_LEVEL: &str = "info";

/// How events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One line per event, no target
    #[default]
    Compact,
    /// Multi-line with source locations
    Pretty,
    /// Newline-delimited JSON objects
    Json,
}

impl LogFormat {
    pub const ALL: [LogFormat; 3] = [LogFormat::Compact, LogFormat::Pretty, LogFormat::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let layer = fmt::layer().with_writer(std::io::stderr);
        match self {
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
            LogFormat::Pretty => layer
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .boxed(),
            LogFormat::Json => layer.json().with_current_span(false).boxed(),
        }
    }
}

impl FromStr for LogFormat {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        LogFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                RoadmapError::logging(format!(
                    "unknown log format {:?} (expected compact, pretty or json)",
                    s
                ))
            })
    }
}

impl stdfmt::Display for LogFormat {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter directive and format, after falling back to the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub directive: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn resolve(level: Option<&str>, format: Option<&str>) -> Result<Self> {
        let directive = level
            .map(str::to_string)
            .or_else(|| std::env::var(LEVEL_VAR).ok())
            .or_else(|| std::env::var("RUST_LOG").ok())
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

        let format = match format
            .map(str::to_string)
            .or_else(|| std::env::var(FORMAT_VAR).ok())
        {
            Some(name) => name.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { directive, format })
    }

    fn filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.directive).map_err(|e| {
            RoadmapError::logging(format!("bad filter {:?}: {}", self.directive, e))
        })
    }

    /// Install this configuration as the global subscriber
    pub fn install(&self) -> Result<()> {
        let filter = self.filter()?;
        Registry::default()
            .with(self.format.layer())
            .with(filter)
            .try_init()
            .map_err(|e| RoadmapError::logging(e.to_string()))
    }
}

/// Install a stderr subscriber; fails on a bad level or format, or if a
/// global subscriber is already set
pub fn init_logging(level: Option<&str>, format: Option<&str>) -> Result<()> {
    LoggingConfig::resolve(level, format)?.install()
}

/// [`init_logging`] with everything taken from the environment
pub fn init_default_logging() -> Result<()> {
    init_logging(None, None)
}
