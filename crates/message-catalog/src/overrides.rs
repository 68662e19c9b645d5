// crates/message-catalog/src/overrides.rs
// ============================================================================
// Module: Runtime Override Tables
// Description: Fail-open loading of localized display text.
// Purpose: Map message identifiers to replacement text read from disk.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! An override table has the same tab-separated shape as a definition table,
//! but only its `Id` and `Text` columns are consulted. Tables are loaded once,
//! when a catalog is built, and shared read-only by every item of the catalog.
//!
//! Loading is fail-open: a missing file, an I/O error, an oversized file, or a
//! malformed table all produce "no override data", and catalogs fall back to
//! their built-in text. Causes are logged through `tracing` only.
//!
//! ## Invariants
//! - Entries have non-empty ids and non-empty text.
//! - On duplicate ids the last row wins.
//! - A loaded table is never mutated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use crate::table::split_table;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Largest override table accepted, in bytes.
pub const MAX_OVERRIDE_TABLE_BYTES: u64 = 16 * 1024 * 1024;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Override table handle shared by every item of one catalog.
pub type SharedOverrides = Option<Arc<OverrideTable>>;

/// Identifier to display-text mapping read from an override table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    /// Replacement text keyed by message identifier.
    entries: HashMap<String, String>,
    /// File the table was read from, when loaded from disk.
    source: Option<PathBuf>,
}

impl OverrideTable {
    /// Parses override entries from table text.
    ///
    /// Returns `None` when the table is too short or lacks `Id` / `Text`.
    ///
    /// # Examples
    /// ```
    /// use message_catalog::OverrideTable;
    ///
    /// let table = OverrideTable::parse("Id\tText\nTEST001\tテスト\nTEST002\t\n").unwrap();
    /// assert_eq!(table.get("TEST001"), Some("テスト"));
    /// assert_eq!(table.get("TEST002"), None);
    /// ```
    #[must_use]
    pub fn parse(content: &str) -> Option<Self> {
        let (columns, rows) = split_table(content).ok()?;
        let mut entries = HashMap::new();
        for line in rows {
            let row = columns.definition(line);
            if !row.id.is_empty() && !row.text.is_empty() {
                entries.insert(row.id, row.text);
            }
        }
        Some(Self {
            entries,
            source: None,
        })
    }

    /// Reads and parses the override table at `path`.
    ///
    /// Every failure is reported as `None`.
    #[must_use]
    pub fn load(path: &Path) -> Option<Self> {
        let content = match read_table(path) {
            Ok(content) => content,
            Err(reason) => {
                tracing::warn!(path = %path.display(), %reason, "override table unreadable; using built-in text");
                return None;
            }
        };
        let Some(mut table) = Self::parse(&content) else {
            tracing::warn!(path = %path.display(), "override table malformed; using built-in text");
            return None;
        };
        table.source = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), entries = table.len(), "override table loaded");
        Some(table)
    }

    /// Resolves, loads, and shares an override table for a catalog.
    ///
    /// `path` falls back to `default_file` when absent or empty; see
    /// [`resolve_override_path`] for the lookup order.
    #[must_use]
    pub fn open(path: Option<&Path>, default_file: &str) -> SharedOverrides {
        let resolved = resolve_override_path(path, default_file)?;
        Self::load(&resolved).map(Arc::new)
    }

    /// Returns the override text for `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the file the table was read from.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl FromIterator<(String, String)> for OverrideTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().filter(|(id, text)| !id.is_empty() && !text.is_empty()).collect(),
            source: None,
        }
    }
}

// ============================================================================
// SECTION: Path Resolution
// ============================================================================

/// Picks the override file to load.
///
/// The candidate is `path` when present and non-empty, else `default_file`.
/// It is tried as given, then relative to [`program_base_dir`]. Returns `None`
/// when neither exists.
#[must_use]
pub fn resolve_override_path(path: Option<&Path>, default_file: &str) -> Option<PathBuf> {
    let candidate = match path {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => PathBuf::from(default_file),
    };
    if candidate.as_os_str().is_empty() {
        return None;
    }
    if candidate.is_file() {
        return Some(candidate);
    }
    let relocated = program_base_dir()?.join(&candidate);
    if relocated.is_file() {
        return Some(relocated);
    }
    tracing::debug!(path = %candidate.display(), "override table not found; using built-in text");
    None
}

/// Returns the directory containing the running executable.
#[must_use]
pub fn program_base_dir() -> Option<PathBuf> {
    std::env::current_exe().ok()?.parent().map(Path::to_path_buf)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads a UTF-8 table with a hard size limit.
fn read_table(path: &Path) -> Result<String, String> {
    let file = fs::File::open(path).map_err(|err| err.to_string())?;
    let mut bytes = Vec::new();
    file.take(MAX_OVERRIDE_TABLE_BYTES + 1).read_to_end(&mut bytes).map_err(|err| err.to_string())?;
    let size = u64::try_from(bytes.len()).map_err(|err| err.to_string())?;
    if size > MAX_OVERRIDE_TABLE_BYTES {
        return Err(format!("table exceeds {MAX_OVERRIDE_TABLE_BYTES} bytes"));
    }
    String::from_utf8(bytes).map_err(|_| "table is not valid utf-8".to_string())
}
