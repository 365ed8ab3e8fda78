//! Logging setup for applications embedding eventedit.
//!
//! The library itself only emits `tracing` events. Binaries and tests that
//! want to see them can install a subscriber with [`init_tracing`]:
//!
//! ```ignore
//! use eventedit::tracing::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::cli_debug()).expect("failed to initialize tracing");
//! ```

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Errors that can occur while installing the subscriber.
#[derive(Debug, Error)]
pub enum TracingError {
    /// A global subscriber is already installed.
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// The filter directive could not be parsed.
    #[error("failed to parse env filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingOutputFormat {
    /// Multi-line human-readable output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
    /// One JSON object per line.
    Json,
}

/// Subscriber configuration.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level for the `eventedit` target when neither `env_filter` nor
    /// `RUST_LOG` is set.
    pub default_level: Level,
    pub output_format: TracingOutputFormat,
    /// Include file and line number.
    pub include_location: bool,
    /// Include the module path.
    pub include_target: bool,
    pub include_timestamp: bool,
    /// Filter directive that takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::INFO,
            output_format: TracingOutputFormat::Pretty,
            include_location: false,
            include_target: true,
            include_timestamp: true,
            env_filter: None,
        }
    }
}

impl TracingConfig {
    /// Debug-level compact output, handy when inspecting generated links.
    #[must_use]
    pub fn cli_debug() -> Self {
        Self {
            default_level: Level::DEBUG,
            output_format: TracingOutputFormat::Compact,
            include_location: true,
            include_timestamp: false,
            ..Self::default()
        }
    }

    /// JSON output for hosts that ship logs to a collector.
    #[must_use]
    pub fn structured() -> Self {
        Self {
            output_format: TracingOutputFormat::Json,
            include_location: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: TracingOutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Resolves the filter: explicit directive, then `RUST_LOG`, then
    /// `eventedit=<default_level>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit directive is invalid.
    pub fn filter(&self) -> Result<EnvFilter, TracingError> {
        match self.env_filter {
            Some(ref directive) => Ok(EnvFilter::try_new(directive)?),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("eventedit={}", self.default_level)))),
        }
    }

    fn fmt_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let layer = fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_target(self.include_target);

        match (self.output_format, self.include_timestamp) {
            (TracingOutputFormat::Pretty, true) => layer.pretty().boxed(),
            (TracingOutputFormat::Pretty, false) => layer.pretty().without_time().boxed(),
            (TracingOutputFormat::Compact, true) => layer.compact().boxed(),
            (TracingOutputFormat::Compact, false) => layer.compact().without_time().boxed(),
            (TracingOutputFormat::Json, true) => layer.json().boxed(),
            (TracingOutputFormat::Json, false) => layer.json().without_time().boxed(),
        }
    }
}

/// Installs a global subscriber built from `config`.
///
/// Call once, early. `RUST_LOG` overrides the default level unless the
/// config carries its own filter.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set or if the filter
/// directive is invalid.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = config.filter()?;
    let subscriber = tracing_subscriber::registry()
        .with(config.fmt_layer())
        .with(filter);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
