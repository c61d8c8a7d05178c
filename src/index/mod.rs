//! Asset Index Domain
//!
//! Represents one asset root as folders of file entries, built fresh from a
//! filesystem scan on every invocation and rendered as a static module.

pub mod emit;
pub mod model;
pub mod scanner;

pub use emit::render_module;
pub use model::{AssetIndex, FileEntry, FolderEntry};
pub use scanner::{Scanner, ScannerConfig};
