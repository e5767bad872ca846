//! Logging setup for Tome hosts
//!
//! Installs a global `tracing` subscriber with console output (JSONL or
//! pretty) and optional rolling JSONL files.
//!
//! # Quick Start
//!
//! ```ignore
//! use tome_logging::{LogConfig, TomeSubscriberBuilder};
//!
//! // JSONL to console
//! let _guard = TomeSubscriberBuilder::new().init();
//!
//! // Pretty human-readable output while developing
//! let _guard = TomeSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//! ```

pub mod config;

pub use config::{ConsoleConfig, FileConfig, JsonlConfig, LogConfig, RotationStrategy};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file appender could not be created
    #[error("Failed to create log file appender: {0}")]
    Appender(String),

    /// A global subscriber is already installed
    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Builder for configuring and initializing the Tome logging subscriber
pub struct TomeSubscriberBuilder {
    config: LogConfig,
}

impl Default for TomeSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TomeSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    ///
    /// Default: JSONL output to console
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Initialize the subscriber globally
    ///
    /// Returns a guard that must be kept alive for file output to flush.
    /// Failures are reported on stderr and leave logging disabled.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: {e}");
                None
            }
        }
    }

    /// Initialize the subscriber globally, reporting failures
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));

        let mut layers: Vec<BoxedLayer> = Vec::new();
        let mut guard = None;

        if self.config.console.enabled {
            layers.push(self.console_layer());
        }

        if let Some(file_config) = &self.config.file {
            let appender = file_appender(file_config)?;
            let (non_blocking, file_guard) = tracing_appender::non_blocking(appender);
            guard = Some(file_guard);
            layers.push(
                self.json_layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .boxed(),
            );
        }

        Registry::default()
            .with(layers)
            .with(env_filter)
            .try_init()
            .map_err(|e| LoggingError::Install(e.to_string()))?;

        Ok(guard)
    }

    fn console_layer(&self) -> BoxedLayer {
        if self.config.console.pretty {
            tracing_subscriber::fmt::layer()
                .with_ansi(self.config.console.ansi)
                .with_target(true)
                .boxed()
        } else {
            self.json_layer().boxed()
        }
    }

    fn json_layer<S>(
        &self,
    ) -> tracing_subscriber::fmt::Layer<
        S,
        tracing_subscriber::fmt::format::JsonFields,
        tracing_subscriber::fmt::format::Format<tracing_subscriber::fmt::format::Json>,
    > {
        let jsonl = &self.config.jsonl;
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(jsonl.include_current_span)
            .with_span_list(jsonl.include_spans)
            .flatten_event(jsonl.flatten_events)
            .with_file(jsonl.include_location)
            .with_line_number(jsonl.include_location)
    }
}

/// Build the rolling appender described by `file_config`
fn file_appender(file_config: &FileConfig) -> Result<RollingFileAppender, LoggingError> {
    let rotation = match file_config.rotation {
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
        RotationStrategy::Never => Rotation::NEVER,
    };
    let mut builder = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(&file_config.prefix)
        .filename_suffix("log");
    if let Some(max_files) = file_config.max_files {
        builder = builder.max_log_files(max_files);
    }
    builder
        .build(&file_config.directory)
        .map_err(|e| LoggingError::Appender(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builder_overrides() {
        let builder = TomeSubscriberBuilder::new()
            .with_config(LogConfig::testing())
            .with_level("debug")
            .with_console(false);
        assert_eq!(builder.config().default_level, "debug");
        assert!(!builder.config().console.enabled);
    }

    #[test]
    fn test_file_appender_creates_directory() {
        let dir = TempDir::new().unwrap();
        let config = FileConfig {
            directory: dir.path().join("logs"),
            rotation: RotationStrategy::Never,
            ..FileConfig::default()
        };
        assert!(file_appender(&config).is_ok());
        assert!(config.directory.exists());
    }
}
