//! Configuration System
//!
//! Layered configuration for the index generator: built-in defaults, an
//! optional `folio.toml` in the asset root, then `FOLIO__`-prefixed
//! environment variables. Validated after loading.

use crate::error::AppError;
use crate::logging::LoggingConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Asset root path; used only when the CLI root is left at its default
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Index generation settings
    #[serde(default)]
    pub index: IndexConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Index generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Output module file name, written inside the asset root
    #[serde(default = "default_output_name")]
    pub output: String,

    /// Entry names excluded from every folder (exact match)
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Sort folders and entries lexicographically before emission
    #[serde(default)]
    pub sort: bool,
}

fn default_output_name() -> String {
    "index.js".to_string()
}

fn default_exclude() -> Vec<String> {
    vec![".DS_Store".to_string()]
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            output: default_output_name(),
            exclude: default_exclude(),
            sort: false,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Index(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Index(msg) => write!(f, "Index: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl IndexConfig {
    /// Validate index settings
    pub fn validate(&self) -> Result<(), String> {
        if self.output.is_empty() {
            return Err("Output name cannot be empty".to_string());
        }
        if self.output.contains('/') || self.output.contains('\\') {
            return Err(format!(
                "Output name must be a bare file name, got '{}'",
                self.output
            ));
        }
        Ok(())
    }
}

impl FolioConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.index.validate() {
            errors.push(ValidationError::Index(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Create a Config builder with defaults applied.
fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("index.output", default_output_name())?
        .set_default("index.exclude", default_exclude())?
        .set_default("index.sort", false)
}

/// Configuration loader: defaults, then workspace file, then environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for an asset root. Reads `<root>/folio.toml` when
    /// present; `FOLIO__`-prefixed environment variables override it.
    pub fn load(root: &Path) -> Result<FolioConfig, AppError> {
        let mut builder = builder_with_defaults()?;

        let workspace_file = root.join("folio.toml");
        if workspace_file.exists() {
            builder = builder.add_source(File::from(workspace_file).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("FOLIO").separator("__"));

        Self::finish(builder)
    }

    /// Load configuration from an explicit file path.
    pub fn load_from_file(path: &Path) -> Result<FolioConfig, AppError> {
        let builder =
            builder_with_defaults()?.add_source(File::from(path.to_path_buf()).required(true));
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<FolioConfig, AppError> {
        let config: FolioConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| {
            AppError::Config(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;
        Ok(config)
    }
}
