// system-tests/build.rs
// ============================================================================
// Module: System Tests Build Script
// Description: Compiles the fixture definition tables into typed catalogs.
// Purpose: Exercise the batch compiler exactly as downstream crates use it.
// Dependencies: message-catalog-gen
// ============================================================================

//! Compiles `data/*messages.tsv` into `$OUT_DIR/message_catalogs.rs`.

#![allow(clippy::print_stdout, reason = "Cargo reads build script directives from stdout.")]

use std::env;
use std::error::Error;
use std::path::PathBuf;

use message_catalog_gen::DEFAULT_RUNTIME_PATH;
use message_catalog_gen::batch::compile_dir;

fn main() -> Result<(), Box<dyn Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let data_dir = manifest_dir.join("data");
    println!("cargo:rerun-if-changed={}", data_dir.display());
    let report = compile_dir(&data_dir, &out_dir, DEFAULT_RUNTIME_PATH)?;
    for source in &report.sources {
        println!("cargo:rerun-if-changed={}", source.display());
    }
    for skipped in &report.skipped {
        println!("cargo:warning=skipped {}: {}", skipped.path.display(), skipped.reason);
    }
    Ok(())
}
