//! Shared test utilities for integration tests
//!
//! Fixture helpers that build asset roots inside a temp directory.

use std::fs;
use std::path::Path;

/// Create `<root>/<folder>/<name>` with placeholder content.
pub fn write_asset(root: &Path, folder: &str, name: &str) {
    let dir = root.join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), b"asset").unwrap();
}

/// Standard card-deck fixture: a `hearts` folder with two images and an OS
/// metadata file, plus a `wild` folder with a multi-dot file name.
pub fn card_fixture(root: &Path) {
    write_asset(root, "hearts", "ace.png");
    write_asset(root, "hearts", "king.png");
    write_asset(root, "hearts", ".DS_Store");
    write_asset(root, "wild", "joker.v2.png");
}
