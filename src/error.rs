//! Error types for the folio asset index generator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning an asset root
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Asset root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Asset root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Scan I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Application-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write index {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Index out of date: {0}. Run `folio generate` to refresh it.")]
    IndexStale(PathBuf),

    #[error("Index not found: {0}. Run `folio generate` to create it.")]
    IndexMissing(PathBuf),

    #[error("Watch error: {0}")]
    Watch(String),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
