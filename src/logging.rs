//! Logging System
//!
//! Structured logging using the `tracing` crate: configurable level, output
//! format, and destination. The `FOLIO_LOG` environment variable overrides
//! the configured level filter.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Master switch; `--quiet` clears it
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format: text or json
    #[serde(default = "default_format")]
    pub format: String,

    /// Destination: stdout, stderr, or file. Defaults to stderr so command
    /// output on stdout stays clean.
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (required when output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Colored output (text format, terminal destinations only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
        }
    }
}

impl LoggingConfig {
    /// Validate logging settings
    pub fn validate(&self) -> Result<(), String> {
        if !LEVELS.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid log level: {} (must be one of {})",
                self.level,
                LEVELS.join(", ")
            ));
        }
        if self.format != "text" && self.format != "json" {
            return Err(format!(
                "Invalid log format: {} (must be 'text' or 'json')",
                self.format
            ));
        }
        parse_output(&self.output).map(|_| ()).map_err(|e| e.to_string())?;
        if self.output == "file" && self.file.is_none() {
            return Err("Log output is 'file' but no log file path is set".to_string());
        }
        Ok(())
    }
}

/// Output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputDest {
    Stdout,
    Stderr,
    File,
}

fn parse_output(output: &str) -> Result<OutputDest, AppError> {
    match output {
        "stdout" => Ok(OutputDest::Stdout),
        "stderr" => Ok(OutputDest::Stderr),
        "file" => Ok(OutputDest::File),
        _ => Err(AppError::Config(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        ))),
    }
}

/// Build the level filter from `FOLIO_LOG` or the configured level.
fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env("FOLIO_LOG") {
        return filter;
    }
    EnvFilter::new(&config.level)
}

/// Initialize the logging system.
///
/// A disabled configuration (or level "off") installs nothing; the process
/// simply emits no log output.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), AppError> {
    let default_config = LoggingConfig::default();
    let config = config.unwrap_or(&default_config);

    if !config.enabled || config.level == "off" {
        return Ok(());
    }

    let filter = build_env_filter(config);
    let dest = parse_output(&config.output)?;

    let writer = match dest {
        OutputDest::Stdout => BoxMakeWriter::new(std::io::stdout),
        OutputDest::Stderr => BoxMakeWriter::new(std::io::stderr),
        OutputDest::File => {
            let path = config.file.clone().ok_or_else(|| {
                AppError::Config("Log output is 'file' but no log file path is set".to_string())
            })?;
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        AppError::Config(format!("Failed to create log directory: {}", e))
                    })?;
                }
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    AppError::Config(format!("Failed to open log file {:?}: {}", path, e))
                })?;
            BoxMakeWriter::new(Arc::new(file))
        }
    };

    let use_ansi = config.color && dest != OutputDest::File;
    let base_subscriber = Registry::default().with(filter);

    if config.format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_ansi)
                    .with_writer(writer),
            )
            .init();
    }

    Ok(())
}
