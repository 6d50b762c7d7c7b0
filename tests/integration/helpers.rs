//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};

/// Directory holding test fixture files.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a named fixture file.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}
