//! Asset index data model: folders and their file entries.

use serde::{Deserialize, Serialize};

/// A single indexed entry within an asset folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Key emitted into the module: the file name truncated at the first `.`.
    pub key: String,
    /// Original file name, extension preserved exactly.
    pub file_name: String,
}

impl FileEntry {
    /// Build an entry from a directory entry name.
    ///
    /// The key is everything before the first `.`; a name with no `.` maps
    /// to itself, and a leading-dot name yields an empty key.
    pub fn from_name(name: impl Into<String>) -> Self {
        let file_name = name.into();
        let key = file_name.split('.').next().unwrap_or("").to_string();
        Self { key, file_name }
    }
}

/// A top-level asset folder and its entries, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    pub name: String,
    pub files: Vec<FileEntry>,
}

/// Full index for one asset root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetIndex {
    pub folders: Vec<FolderEntry>,
}

impl AssetIndex {
    /// Total number of file entries across all folders.
    pub fn entry_count(&self) -> usize {
        self.folders.iter().map(|f| f.files.len()).sum()
    }

    /// Sort folders and entries lexicographically by name.
    ///
    /// Opt-in only; the default output preserves filesystem enumeration
    /// order.
    pub fn sort(&mut self) {
        self.folders.sort_by(|a, b| a.name.cmp(&b.name));
        for folder in &mut self.folders {
            folder.files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        }
    }
}
