//! Filesystem scanner for asset roots.
//!
//! Enumerates the immediate subdirectories of a root and the immediate
//! entries of each subdirectory. Nothing is descended into further; order is
//! whatever the underlying directory iterator returns.

use crate::error::ScanError;
use crate::index::model::{AssetIndex, FileEntry, FolderEntry};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scanner configuration
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Entry names excluded from every folder (exact match).
    pub exclude_names: Vec<String>,
    /// Whether to follow symbolic links when classifying top-level entries
    /// (default: false for determinism).
    pub follow_symlinks: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            exclude_names: vec![".DS_Store".to_string()],
            follow_symlinks: false,
        }
    }
}

/// Asset root scanner
pub struct Scanner {
    root: PathBuf,
    config: ScannerConfig,
}

impl Scanner {
    /// Create a new scanner for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: ScannerConfig::default(),
        }
    }

    /// Create a scanner with custom configuration
    pub fn with_config(root: PathBuf, config: ScannerConfig) -> Self {
        Self { root, config }
    }

    /// Scan the root and build the asset index.
    ///
    /// Top-level files (including a previously generated index module) are
    /// ignored; only directories become folder entries. Inner entries are
    /// not filtered by type, so a directory inside an asset folder is
    /// indexed like any other entry.
    pub fn scan(&self) -> Result<AssetIndex, ScanError> {
        let metadata = std::fs::metadata(&self.root).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScanError::RootNotFound(self.root.clone())
            } else {
                ScanError::IoError(e)
            }
        })?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let mut folders = Vec::new();
        for entry in self.immediate_entries(&self.root) {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let files = self.scan_folder(entry.path())?;
            folders.push(FolderEntry { name, files });
        }

        Ok(AssetIndex { folders })
    }

    /// List the entries of one asset folder, honoring the exclusion list.
    fn scan_folder(&self, folder: &Path) -> Result<Vec<FileEntry>, ScanError> {
        let mut files = Vec::new();
        for entry in self.immediate_entries(folder) {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.config.exclude_names.iter().any(|ex| ex == &name) {
                continue;
            }
            files.push(FileEntry::from_name(name));
        }
        Ok(files)
    }

    /// Depth-1 iterator over a directory in filesystem-enumeration order.
    fn immediate_entries(
        &self,
        dir: &Path,
    ) -> impl Iterator<Item = Result<walkdir::DirEntry, ScanError>> {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .map(|entry| {
                entry.map_err(|e| {
                    ScanError::IoError(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        format!("Failed to list directory: {}", e),
                    ))
                })
            })
    }
}
