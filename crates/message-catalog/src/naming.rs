// crates/message-catalog/src/naming.rs
// ============================================================================
// Module: Catalog Naming
// Description: File-name conventions for catalog identity.
// Purpose: Derive type prefixes and localized override file names.
// Dependencies: Standard library path utilities.
// ============================================================================

//! ## Overview
//! A definition table's file name decides the names of everything generated
//! from it. `Validation_messages.tsv` yields the `Validation` prefix
//! (`ValidationMessageCatalog`, `ValidationMessageCategory`, ...). Any other
//! name, including plain `messages.tsv`, uses the `Default` prefix.

use std::path::Path;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Type prefix used when a file name carries no catalog prefix.
pub const DEFAULT_PREFIX: &str = "Default";

/// File-stem suffix that marks a prefixed definition table.
const MESSAGES_SUFFIX: &str = "messages";

// ============================================================================
// SECTION: Catalog Name
// ============================================================================

/// Identity of a catalog derived from its definition file name.
///
/// # Invariants
/// - `source_file` is a bare file name without directories.
/// - `prefix` is `Some` only for `<prefix>_messages.<ext>` names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogName {
    /// Definition file name, e.g. `Validation_messages.tsv`.
    source_file: String,
    /// Prefix extracted from the file stem, if any.
    prefix: Option<String>,
}

impl CatalogName {
    /// Derives the catalog identity from a file name or path.
    ///
    /// # Examples
    /// ```
    /// use message_catalog::CatalogName;
    ///
    /// let name = CatalogName::from_file_name("data/Validation_messages.tsv");
    /// assert_eq!(name.prefix(), Some("Validation"));
    /// assert_eq!(name.catalog_type(), "ValidationMessageCatalog");
    ///
    /// let plain = CatalogName::from_file_name("messages.tsv");
    /// assert_eq!(plain.prefix(), None);
    /// assert_eq!(plain.category_type(), "DefaultMessageCategory");
    /// ```
    #[must_use]
    pub fn from_file_name(file_name: impl AsRef<Path>) -> Self {
        let path = file_name.as_ref();
        let source_file = path.file_name().map_or_else(
            || path.to_string_lossy().into_owned(),
            |name| name.to_string_lossy().into_owned(),
        );
        let stem = Path::new(&source_file)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let prefix = match stem.split_once('_') {
            Some((prefix, suffix)) if !prefix.is_empty() && suffix == MESSAGES_SUFFIX => {
                Some(prefix.to_string())
            }
            _ => None,
        };
        Self {
            source_file,
            prefix,
        }
    }

    /// Returns the definition file name.
    #[must_use]
    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    /// Returns the prefix extracted from the file name, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns the prefix used for type names (`Default` when unprefixed).
    #[must_use]
    pub fn type_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    /// Returns the catalog type name.
    #[must_use]
    pub fn catalog_type(&self) -> String {
        format!("{}MessageCatalog", self.type_prefix())
    }

    /// Returns the message item type name.
    #[must_use]
    pub fn item_type(&self) -> String {
        format!("{}MessageItem", self.type_prefix())
    }

    /// Returns the category enumeration type name.
    #[must_use]
    pub fn category_type(&self) -> String {
        format!("{}MessageCategory", self.type_prefix())
    }

    /// Returns the severity enumeration type name.
    #[must_use]
    pub fn severity_type(&self) -> String {
        format!("{}MessageSeverity", self.type_prefix())
    }

    /// Returns the override file name for `locale`, e.g. `messages_ja.tsv`.
    #[must_use]
    pub fn localized_file(&self, locale: &str) -> String {
        localized_file_name(&self.source_file, locale)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Inserts `_<locale>` before the extension of `source_file`.
///
/// # Examples
/// ```
/// use message_catalog::naming::localized_file_name;
///
/// assert_eq!(localized_file_name("Validation_messages.tsv", "ja"), "Validation_messages_ja.tsv");
/// assert_eq!(localized_file_name("messages", "ja"), "messages_ja");
/// ```
#[must_use]
pub fn localized_file_name(source_file: &str, locale: &str) -> String {
    match source_file.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => format!("{stem}_{locale}.{extension}"),
        _ => format!("{source_file}_{locale}"),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
