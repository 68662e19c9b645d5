// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared fixture paths for catalog system tests.
// Purpose: Locate the data/ tables independently of the working directory.
// Dependencies: Standard library only.
// ============================================================================

//! Shared helpers for catalog system tests.

use std::path::Path;
use std::path::PathBuf;

/// Returns the path of a fixture table under `data/`.
pub fn data_path(file_name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(file_name)
}
