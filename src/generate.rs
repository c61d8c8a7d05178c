//! Generate and check operations over an asset root.
//!
//! `run_generate` scans, renders, and overwrites the output module in full;
//! `run_check` renders in memory and compares byte-for-byte against the file
//! on disk. Both report a BLAKE3 digest of the rendered text so freshness is
//! visible in summaries without re-reading the tree.

use crate::error::{AppError, ScanError};
use crate::index::{render_module, AssetIndex, Scanner, ScannerConfig};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One index operation: which root, which output name, which exclusions,
/// and whether to sort lexicographically before emission.
#[derive(Debug, Clone)]
pub struct IndexRequest {
    pub root: PathBuf,
    pub output_name: String,
    pub exclude_names: Vec<String>,
    pub sort: bool,
}

impl IndexRequest {
    /// Request with default output name and exclusions.
    pub fn new(root: PathBuf) -> Self {
        let config = ScannerConfig::default();
        Self {
            root,
            output_name: "index.js".to_string(),
            exclude_names: config.exclude_names,
            sort: false,
        }
    }

    /// Path of the generated module inside the root.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_name)
    }

    /// Scan the root and render the module text.
    pub fn render(&self) -> Result<(AssetIndex, String), ScanError> {
        let config = ScannerConfig {
            exclude_names: self.exclude_names.clone(),
            ..ScannerConfig::default()
        };
        let mut index = Scanner::with_config(self.root.clone(), config).scan()?;
        if self.sort {
            index.sort();
        }
        let text = render_module(&index);
        Ok((index, text))
    }
}

/// Per-folder entry count for summaries.
#[derive(Debug, Clone, Serialize)]
pub struct FolderSummary {
    pub name: String,
    pub entries: usize,
}

/// Result of a generate run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutcome {
    pub output_path: PathBuf,
    pub folders: Vec<FolderSummary>,
    pub entry_count: usize,
    pub bytes: usize,
    pub digest: String,
    pub dry_run: bool,
}

/// Check verdict for the on-disk module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    InSync,
    Stale,
    Missing,
}

/// Result of a check run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub output_path: PathBuf,
    pub expected_digest: String,
    pub actual_digest: Option<String>,
}

fn digest_of(text: &[u8]) -> String {
    hex::encode(blake3::hash(text).as_bytes())
}

/// Scan the root and write the index module, overwriting any existing
/// content in full. With `dry_run`, render and report without writing.
pub fn run_generate(request: &IndexRequest, dry_run: bool) -> Result<GenerateOutcome, AppError> {
    let (index, text) = request.render()?;
    let output_path = request.output_path();

    if !dry_run {
        fs::write(&output_path, text.as_bytes()).map_err(|e| AppError::WriteFailed {
            path: output_path.clone(),
            source: e,
        })?;
        info!(
            path = %output_path.display(),
            folders = index.folders.len(),
            entries = index.entry_count(),
            "Index module written"
        );
    } else {
        debug!(
            path = %output_path.display(),
            "Dry run; index module not written"
        );
    }

    Ok(GenerateOutcome {
        output_path,
        entry_count: index.entry_count(),
        folders: index
            .folders
            .iter()
            .map(|f| FolderSummary {
                name: f.name.clone(),
                entries: f.files.len(),
            })
            .collect(),
        bytes: text.len(),
        digest: digest_of(text.as_bytes()),
        dry_run,
    })
}

/// Compare the on-disk module against a fresh render of the current tree.
pub fn run_check(request: &IndexRequest) -> Result<CheckOutcome, AppError> {
    let (_, text) = request.render()?;
    let output_path = request.output_path();
    let expected_digest = digest_of(text.as_bytes());

    let (status, actual_digest) = match fs::read(&output_path) {
        Ok(existing) => {
            let status = if existing == text.as_bytes() {
                CheckStatus::InSync
            } else {
                CheckStatus::Stale
            };
            (status, Some(digest_of(&existing)))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => (CheckStatus::Missing, None),
        Err(e) => return Err(AppError::Io(e)),
    };

    debug!(
        path = %output_path.display(),
        status = ?status,
        "Index check completed"
    );

    Ok(CheckOutcome {
        status,
        output_path,
        expected_digest,
        actual_digest,
    })
}

/// Canonicalize and classify an asset root before any operation runs.
pub fn resolve_root(root: &Path) -> Result<PathBuf, AppError> {
    let canonical = dunce::canonicalize(root).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::Scan(ScanError::RootNotFound(root.to_path_buf()))
        } else {
            AppError::Scan(ScanError::IoError(e))
        }
    })?;
    if !canonical.is_dir() {
        return Err(AppError::Scan(ScanError::NotADirectory(canonical)));
    }
    Ok(canonical)
}
