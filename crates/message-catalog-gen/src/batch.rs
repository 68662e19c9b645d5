// crates/message-catalog-gen/src/batch.rs
// ============================================================================
// Module: Batch Compilation
// Description: Compiles every definition table of a directory into one file.
// Purpose: Drive catalog generation from build scripts.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! [`compile_dir`] is meant for `build.rs`: it scans one directory for
//! definition tables, renders them into a single `message_catalogs.rs`, and
//! reports which files to watch. Structurally invalid tables are skipped and
//! listed in the [`BuildReport`]; any other error fails the build.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use message_catalog_gen::DEFAULT_RUNTIME_PATH;
//! use message_catalog_gen::batch::compile_dir;
//!
//! # fn main() -> Result<(), message_catalog_gen::GenError> {
//! let report = compile_dir(Path::new("data"), Path::new("target/gen"), DEFAULT_RUNTIME_PATH)?;
//! for source in &report.sources {
//!     assert!(source.starts_with("data"));
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::CatalogGenerator;
use crate::GenError;
use crate::render;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// File name written into the output directory.
pub const OUTPUT_FILE: &str = "message_catalogs.rs";

/// File-name suffix identifying definition tables.
pub const TABLE_SUFFIX: &str = "messages.tsv";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Outcome of one batch compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Every definition table found, sorted by file name.
    pub sources: Vec<PathBuf>,
    /// Catalog type names emitted, in source order.
    pub catalogs: Vec<String>,
    /// Tables skipped for structural defects.
    pub skipped: Vec<SkippedTable>,
    /// Path of the generated file.
    pub output: PathBuf,
}

/// A definition table left out of the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTable {
    /// Table path.
    pub path: PathBuf,
    /// Rendered error.
    pub reason: String,
}

// ============================================================================
// SECTION: Compilation
// ============================================================================

/// Compiles every `*messages.tsv` table in `input_dir` into
/// `out_dir/message_catalogs.rs`.
///
/// The directory is not searched recursively. Localized override tables
/// such as `messages_ja.tsv` do not match the suffix and are ignored. The
/// output file is written even when no table compiles, so an `include!` of
/// it always succeeds; it is left untouched when its content is unchanged.
///
/// # Errors
/// Returns [`GenError`] when the directory cannot be read, a table holds
/// invalid identifiers or duplicate ids, two tables derive the same type
/// names, or the output cannot be written.
pub fn compile_dir(
    input_dir: &Path,
    out_dir: &Path,
    runtime_path: &str,
) -> Result<BuildReport, GenError> {
    let sources = find_tables(input_dir)?;
    let mut report = BuildReport {
        output: out_dir.join(OUTPUT_FILE),
        ..BuildReport::default()
    };
    let mut claimed: BTreeMap<String, String> = BTreeMap::new();
    let mut generators = Vec::new();
    for path in &sources {
        let generator = match CatalogGenerator::load(path) {
            Ok(generator) => generator,
            Err(err) if err.is_structural() => {
                tracing::warn!(table = %path.display(), error = %err, "skipping definition table");
                report.skipped.push(SkippedTable {
                    path: path.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
            Err(err) => return Err(err),
        };
        let generator = generator.with_runtime_path(runtime_path)?;
        let catalog_type = generator.name().catalog_type();
        let source_file = generator.name().source_file().to_string();
        if let Some(first) = claimed.get(&catalog_type) {
            return Err(GenError::NameCollision {
                first: first.clone(),
                second: source_file,
                type_name: catalog_type,
            });
        }
        claimed.insert(catalog_type.clone(), source_file);
        report.catalogs.push(catalog_type);
        generators.push(generator);
    }

    let mut out = String::new();
    render::render_header(
        &mut out,
        generators.iter().map(|generator| generator.name().source_file()),
    );
    for generator in &generators {
        render::render_catalog(&mut out, generator);
    }
    write_if_changed(&report.output, &out)?;
    tracing::debug!(
        output = %report.output.display(),
        catalogs = report.catalogs.len(),
        skipped = report.skipped.len(),
        "message catalogs compiled"
    );
    report.sources = sources;
    Ok(report)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Lists definition tables directly inside `dir`, sorted by path.
fn find_tables(dir: &Path) -> Result<Vec<PathBuf>, GenError> {
    let entries = fs::read_dir(dir)
        .map_err(|err| GenError::Io(format!("{}: {err}", dir.display())))?;
    let mut tables = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| GenError::Io(err.to_string()))?;
        let path = entry.path();
        let is_table = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(TABLE_SUFFIX));
        if is_table && path.is_file() {
            tables.push(path);
        }
    }
    tables.sort();
    Ok(tables)
}

/// Writes `contents` to `path` unless the file already holds it.
fn write_if_changed(path: &Path, contents: &str) -> Result<(), GenError> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == contents) {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| GenError::Io(err.to_string()))?;
    }
    fs::write(path, contents).map_err(|err| GenError::Io(err.to_string()))
}
