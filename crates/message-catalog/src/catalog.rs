// crates/message-catalog/src/catalog.rs
// ============================================================================
// Module: Data-Driven Catalog
// Description: Message catalogs built from a definition table at runtime.
// Purpose: Offer catalog lookups without a build-time generation step.
// Dependencies: thiserror, tracing
// ============================================================================

//! ## Overview
//! [`MessageCatalog`] is the runtime counterpart of a generated catalog. It
//! parses a definition table when the program starts, derives the table's
//! category and severity value sets, and exposes items by identifier in
//! definition order. Override handling is identical to generated catalogs.
//!
//! ## Invariants
//! - Construction is atomic: every row becomes an item, or an error is returned.
//! - Identifiers are unique within a catalog.
//! - The override table is loaded once and never reloaded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::item::MessageItem;
use crate::naming::CatalogName;
use crate::overrides::OverrideTable;
use crate::overrides::SharedOverrides;
use crate::schema::CatalogSchema;
use crate::schema::Classification;
use crate::table::MessageDefinition;
use crate::table::TableError;
use crate::table::parse_definitions;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Largest definition table accepted at runtime, in bytes.
pub const MAX_DEFINITION_TABLE_BYTES: u64 = 16 * 1024 * 1024;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Item type of data-driven catalogs.
pub type DynamicMessageItem = MessageItem<Classification, Classification>;

/// Errors raised while building a [`MessageCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The definition table could not be read.
    #[error("failed to read definition table {path}: {message}")]
    Io {
        /// Table path.
        path: String,
        /// Underlying error text.
        message: String,
    },
    /// The definition table exceeds [`MAX_DEFINITION_TABLE_BYTES`].
    #[error("definition table {path} exceeds {MAX_DEFINITION_TABLE_BYTES} bytes")]
    TooLarge {
        /// Table path.
        path: String,
    },
    /// The definition table is structurally invalid.
    #[error("invalid definition table {file}: {source}")]
    Table {
        /// Definition file name.
        file: String,
        /// Structural defect.
        source: TableError,
    },
    /// Two rows share an identifier.
    #[error("duplicate message id `{id}` in {file}")]
    DuplicateId {
        /// Definition file name.
        file: String,
        /// Repeated identifier.
        id: String,
    },
}

/// Message catalog built from a definition table at runtime.
///
/// # Examples
/// ```
/// use message_catalog::MessageCatalog;
///
/// let table = "Id\tText\tCategory\tSeverity\nINFO001\tHello, {0}!\tGreeting\tInformation\n";
/// let catalog = MessageCatalog::from_source("messages.tsv", table, None)?;
/// let item = catalog.get("INFO001").unwrap();
/// assert_eq!(item.format(&[&"James"]), "Hello, James!");
/// assert_eq!(item.category().as_str(), "Greeting");
/// # Ok::<(), message_catalog::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    /// Identity derived from the definition file name.
    name: CatalogName,
    /// Category and severity value sets.
    schema: CatalogSchema,
    /// Identifiers in definition order, parallel to `items`.
    ids: Vec<String>,
    /// Items in definition order.
    items: Vec<DynamicMessageItem>,
    /// Item position keyed by identifier.
    index: HashMap<String, usize>,
    /// Override table shared by all items.
    overrides: SharedOverrides,
}

impl MessageCatalog {
    /// Loads a catalog from a definition table file.
    ///
    /// Overrides are resolved from `override_path`, defaulting to the
    /// definition file name; see [`OverrideTable::open`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the table cannot be read, is structurally
    /// invalid, or repeats an identifier. Override failures are never errors.
    pub fn load(
        definition_path: impl AsRef<Path>,
        override_path: Option<&Path>,
    ) -> Result<Self, CatalogError> {
        let definition_path = definition_path.as_ref();
        let content = read_definition_table(definition_path)?;
        Self::from_source(definition_path, &content, override_path)
    }

    /// Builds a catalog from definition table text.
    ///
    /// `file_name` names the table; it decides the catalog identity and the
    /// default override file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the table is structurally invalid or
    /// repeats an identifier.
    pub fn from_source(
        file_name: impl AsRef<Path>,
        content: &str,
        override_path: Option<&Path>,
    ) -> Result<Self, CatalogError> {
        let name = CatalogName::from_file_name(file_name);
        let definitions = parse_definitions(content).map_err(|source| CatalogError::Table {
            file: name.source_file().to_string(),
            source,
        })?;
        let overrides = OverrideTable::open(override_path, name.source_file());
        Self::from_definitions(name, &definitions, overrides)
    }

    /// Builds a catalog from parsed rows and an already loaded override table.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] when two rows share an identifier.
    pub fn from_definitions(
        name: CatalogName,
        definitions: &[MessageDefinition],
        overrides: SharedOverrides,
    ) -> Result<Self, CatalogError> {
        let schema = CatalogSchema::derive(definitions);
        let mut ids = Vec::with_capacity(definitions.len());
        let mut items = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            if index.insert(definition.id.clone(), items.len()).is_some() {
                return Err(CatalogError::DuplicateId {
                    file: name.source_file().to_string(),
                    id: definition.id.clone(),
                });
            }
            let category = schema.categories.classify(&definition.category).unwrap_or_default();
            let severity = schema.severities.classify(&definition.severity).unwrap_or_default();
            ids.push(definition.id.clone());
            items.push(MessageItem::new(
                definition.id.as_str(),
                definition.text.as_str(),
                category,
                severity,
                definition.description.as_str(),
                overrides.clone(),
            ));
        }
        tracing::debug!(
            catalog = %name.catalog_type(),
            messages = items.len(),
            overridden = overrides.is_some(),
            "message catalog built"
        );
        Ok(Self {
            name,
            schema,
            ids,
            items,
            index,
            overrides,
        })
    }

    /// Returns the catalog identity.
    #[must_use]
    pub const fn name(&self) -> &CatalogName {
        &self.name
    }

    /// Returns the category and severity value sets.
    #[must_use]
    pub const fn schema(&self) -> &CatalogSchema {
        &self.schema
    }

    /// Looks up a message by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DynamicMessageItem> {
        self.index.get(id).and_then(|position| self.items.get(*position))
    }

    /// Returns identifiers in definition order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Iterates `(id, item)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DynamicMessageItem)> {
        self.ids.iter().map(String::as_str).zip(self.items.iter())
    }

    /// Returns the number of messages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the catalog has no messages.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the loaded override table, if any.
    #[must_use]
    pub fn overrides(&self) -> Option<&OverrideTable> {
        self.overrides.as_deref()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads a definition table with a hard size limit.
fn read_definition_table(path: &Path) -> Result<String, CatalogError> {
    let io_error = |err: std::io::Error| CatalogError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    };
    let file = fs::File::open(path).map_err(io_error)?;
    let mut bytes = Vec::new();
    file.take(MAX_DEFINITION_TABLE_BYTES + 1).read_to_end(&mut bytes).map_err(io_error)?;
    let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
    if size > MAX_DEFINITION_TABLE_BYTES {
        return Err(CatalogError::TooLarge {
            path: path.display().to_string(),
        });
    }
    String::from_utf8(bytes).map_err(|err| CatalogError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}
