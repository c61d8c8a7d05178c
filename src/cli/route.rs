//! CLI route: single route table and run context. Dispatches to the
//! generate, check, and watch operations and formats their outcomes.

use crate::cli::output::{format_check_outcome, format_generate_outcome};
use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, FolioConfig};
use crate::error::AppError;
use crate::generate::{resolve_root, run_check, run_generate, CheckStatus, IndexRequest};
use crate::watch::{run_watch, WatchOptions};
use std::path::{Path, PathBuf};

/// Runtime context for CLI execution: resolved asset root and configuration.
#[derive(Debug)]
pub struct RunContext {
    root: PathBuf,
    config: FolioConfig,
}

impl RunContext {
    /// Create run context from a root path and optional config file path.
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, AppError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&root)?
        };

        // The CLI default "." defers to a root configured in folio.toml.
        let chosen = if root == Path::new(".") {
            config.root.clone().unwrap_or(root)
        } else {
            root
        };
        let root = resolve_root(&chosen)?;

        Ok(Self { root, config })
    }

    /// Resolved asset root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn index_request(&self, sort: bool) -> IndexRequest {
        IndexRequest {
            root: self.root.clone(),
            output_name: self.config.index.output.clone(),
            exclude_names: self.config.index.exclude.clone(),
            sort: sort || self.config.index.sort,
        }
    }

    /// Execute a parsed command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, AppError> {
        match command {
            Commands::Generate {
                dry_run,
                sort,
                format,
            } => {
                let outcome = run_generate(&self.index_request(*sort), *dry_run)?;
                format_generate_outcome(&outcome, format)
            }
            Commands::Check { sort, format } => {
                let outcome = run_check(&self.index_request(*sort))?;
                match outcome.status {
                    CheckStatus::InSync => format_check_outcome(&outcome, format),
                    CheckStatus::Stale => Err(AppError::IndexStale(outcome.output_path)),
                    CheckStatus::Missing => Err(AppError::IndexMissing(outcome.output_path)),
                }
            }
            Commands::Watch { debounce_ms, sort } => {
                run_watch(
                    &self.index_request(*sort),
                    &WatchOptions {
                        debounce_ms: *debounce_ms,
                    },
                )?;
                Ok("Watch stopped.".to_string())
            }
        }
    }
}
