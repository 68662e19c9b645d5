// crates/message-catalog-gen/src/lib.rs
// ============================================================================
// Module: Message Catalog Generator Library
// Description: Deterministic compiler from TSV definition tables to Rust.
// Purpose: Emit typed message catalogs for build scripts and the CLI.
// Dependencies: message-catalog, serde, thiserror, toml, tracing
// ============================================================================

//! ## Overview
//! This crate compiles a message definition table (`messages.tsv`,
//! `Validation_messages.tsv`, ...) into Rust source declaring:
//! - `{P}MessageCategory` and `{P}MessageSeverity` enums derived from the
//!   table's distinct values, with `None` as the default member;
//! - a `{P}MessageItem` alias over [`message_catalog::MessageItem`];
//! - a `{P}MessageCatalog` struct with one public field per row.
//!
//! The prefix `P` comes from the file name (see
//! [`message_catalog::CatalogName`]).
//!
//! ### Design Notes
//! - Output is deterministic: messages follow table order and enum members
//!   follow ordinal string order after `None`.
//! - Ids and classification values must be plain Rust identifiers; tables
//!   that would generate uncompilable code are rejected up front.
//! - Structurally invalid tables (missing `Id`/`Text` column, no rows) are
//!   reported with [`GenError::is_structural`] so batch builds can skip them.
//!
//! ### Security Posture
//! Definition tables are treated as untrusted input. The generator enforces
//! a hard input size limit and escapes every table value it emits into
//! string literals or documentation.
//!
//! ## Index
//! - Public API: [`CatalogGenerator`], [`GenError`], [`DEFAULT_RUNTIME_PATH`], [`MAX_DEFINITION_BYTES`]
//! - Build scripts: [`batch::compile_dir`]
//! - CLI configuration: [`config::GeneratorConfig`]

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod batch;
pub mod config;
mod ident;
mod render;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use message_catalog::CatalogName;
use message_catalog::CatalogSchema;
use message_catalog::MessageDefinition;
use message_catalog::TableError;
use message_catalog::schema::NONE_MEMBER;
use message_catalog::table::parse_definitions;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Public API
// ============================================================================

// ============================================================================
// CONSTANTS: Generator defaults and limits
// ============================================================================

/// Path of the runtime crate referenced by generated code.
pub const DEFAULT_RUNTIME_PATH: &str = "::message_catalog";

/// Maximum definition table size accepted by the generator.
pub const MAX_DEFINITION_BYTES: u64 = 4 * 1024 * 1024;

/// Errors raised by the catalog generator.
///
/// # Invariants
/// - Variant meanings are stable for automation and tests.
///
/// # Examples
/// ```
/// use message_catalog_gen::GenError;
///
/// let err = GenError::Empty("messages.tsv".to_string());
/// assert!(err.is_structural());
/// assert_eq!(err.to_string(), "definition table messages.tsv has no messages");
/// ```
#[derive(Debug, Error)]
pub enum GenError {
    /// IO error while reading or writing files.
    #[error("io error: {0}")]
    Io(String),
    /// The definition table exceeds [`MAX_DEFINITION_BYTES`].
    #[error("definition table {path} exceeds {MAX_DEFINITION_BYTES} bytes")]
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
    /// Every row of the definition table was skipped.
    #[error("definition table {0} has no messages")]
    Empty(String),
    /// A value cannot be emitted as a Rust identifier.
    #[error("invalid {kind} `{value}` in {file}: not a usable Rust identifier")]
    InvalidIdentifier {
        /// Definition file name.
        file: String,
        /// What the value names (message id, category, ...).
        kind: &'static str,
        /// Offending value.
        value: String,
    },
    /// Two rows share an identifier.
    #[error("duplicate message id `{id}` in {file}")]
    DuplicateId {
        /// Definition file name.
        file: String,
        /// Repeated identifier.
        id: String,
    },
    /// Two tables generate the same type names.
    #[error("{first} and {second} both generate {type_name}")]
    NameCollision {
        /// Table that claimed the name first.
        first: String,
        /// Table that collided.
        second: String,
        /// Colliding catalog type name.
        type_name: String,
    },
    /// Generator configuration error.
    #[error("config error: {0}")]
    Config(String),
}

impl GenError {
    /// Returns true for table-shape defects that batch builds skip.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Table { .. } | Self::Empty(_))
    }
}

/// Generator loaded with one validated definition table.
///
/// # Invariants
/// - Message order matches the definition table.
/// - Ids are unique, and every id and classification value is a valid Rust
///   identifier.
/// - Rendering is deterministic for a fixed table and runtime path.
///
/// # Examples
/// ```
/// use message_catalog_gen::CatalogGenerator;
///
/// let table = "Id\tText\tCategory\tSeverity\nGREET\tHello, {0}!\tGreeting\tInformation\n";
/// let generator = CatalogGenerator::from_source("messages.tsv", table)?;
/// let source = generator.render();
/// assert!(source.contains("pub struct DefaultMessageCatalog"));
/// assert!(source.contains("pub GREET: DefaultMessageItem"));
/// # Ok::<(), message_catalog_gen::GenError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogGenerator {
    /// Catalog identity derived from the file name.
    name: CatalogName,
    /// Validated rows in table order.
    definitions: Vec<MessageDefinition>,
    /// Derived category and severity enumerations.
    schema: CatalogSchema,
    /// Runtime crate path used in generated code.
    runtime_path: String,
}

impl CatalogGenerator {
    /// Loads and validates a definition table from disk.
    ///
    /// # Errors
    /// Returns [`GenError`] when the file cannot be read, exceeds
    /// [`MAX_DEFINITION_BYTES`], or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GenError> {
        let path = path.as_ref();
        let content = read_definition_bytes(path)?;
        Self::from_source(path, &content)
    }

    /// Parses and validates definition table text.
    ///
    /// `file_name` decides the type prefix and the default override file.
    ///
    /// # Errors
    /// Returns [`GenError`] when the table is structurally invalid, has no
    /// rows, repeats an id, or holds values that are not Rust identifiers.
    pub fn from_source(file_name: impl AsRef<Path>, content: &str) -> Result<Self, GenError> {
        let name = CatalogName::from_file_name(file_name);
        let file = name.source_file().to_string();
        let definitions = parse_definitions(content).map_err(|source| GenError::Table {
            file: file.clone(),
            source,
        })?;
        if definitions.is_empty() {
            return Err(GenError::Empty(file));
        }
        validate_type_prefix(&name)?;
        validate_definitions(&file, &definitions)?;
        let schema = CatalogSchema::derive(&definitions);
        validate_members(&file, "category", schema.categories.members())?;
        validate_members(&file, "severity", schema.severities.members())?;
        tracing::debug!(
            file = %file,
            catalog = %name.catalog_type(),
            messages = definitions.len(),
            categories = schema.categories.len(),
            severities = schema.severities.len(),
            "definition table validated"
        );
        Ok(Self {
            name,
            definitions,
            schema,
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
        })
    }

    /// Sets the runtime crate path used in generated code.
    ///
    /// # Errors
    /// Returns [`GenError::InvalidIdentifier`] when `runtime_path` is not a
    /// Rust module path.
    pub fn with_runtime_path(mut self, runtime_path: impl Into<String>) -> Result<Self, GenError> {
        let runtime_path = runtime_path.into();
        if !ident::is_module_path(&runtime_path) {
            return Err(GenError::InvalidIdentifier {
                file: self.name.source_file().to_string(),
                kind: "runtime path",
                value: runtime_path,
            });
        }
        self.runtime_path = runtime_path;
        Ok(self)
    }

    /// Returns the catalog identity.
    #[must_use]
    pub const fn name(&self) -> &CatalogName {
        &self.name
    }

    /// Returns the validated rows in table order.
    #[must_use]
    pub fn definitions(&self) -> &[MessageDefinition] {
        &self.definitions
    }

    /// Returns the derived category and severity enumerations.
    #[must_use]
    pub const fn schema(&self) -> &CatalogSchema {
        &self.schema
    }

    /// Returns the runtime crate path used in generated code.
    #[must_use]
    pub fn runtime_path(&self) -> &str {
        &self.runtime_path
    }

    /// Renders a standalone Rust source file for this catalog.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        render::render_header(&mut out, [self.name.source_file()]);
        render::render_catalog(&mut out, self);
        out
    }

    /// Returns a serializable view of the parsed table and derived schema.
    #[must_use]
    pub fn summary(&self) -> CatalogSummary<'_> {
        CatalogSummary {
            source_file: self.name.source_file(),
            catalog_type: self.name.catalog_type(),
            schema: &self.schema,
            messages: &self.definitions,
        }
    }
}

/// Serializable description of a compiled catalog, printed by `inspect`.
#[derive(Debug, Serialize)]
pub struct CatalogSummary<'a> {
    /// Definition file name.
    pub source_file: &'a str,
    /// Generated catalog type name.
    pub catalog_type: String,
    /// Derived category and severity enumerations.
    pub schema: &'a CatalogSchema,
    /// Parsed rows in table order.
    pub messages: &'a [MessageDefinition],
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Rejects file-name prefixes that cannot start a type name.
fn validate_type_prefix(name: &CatalogName) -> Result<(), GenError> {
    if ident::is_identifier(&name.catalog_type()) {
        return Ok(());
    }
    Err(GenError::InvalidIdentifier {
        file: name.source_file().to_string(),
        kind: "type prefix",
        value: name.type_prefix().to_string(),
    })
}

/// Checks ids for identifier syntax and uniqueness.
fn validate_definitions(file: &str, definitions: &[MessageDefinition]) -> Result<(), GenError> {
    let mut seen = HashSet::with_capacity(definitions.len());
    for definition in definitions {
        if !ident::is_identifier(&definition.id) {
            return Err(GenError::InvalidIdentifier {
                file: file.to_string(),
                kind: "message id",
                value: definition.id.clone(),
            });
        }
        if !seen.insert(definition.id.as_str()) {
            return Err(GenError::DuplicateId {
                file: file.to_string(),
                id: definition.id.clone(),
            });
        }
    }
    Ok(())
}

/// Checks that enumeration members can become enum variants.
fn validate_members(file: &str, kind: &'static str, members: &[String]) -> Result<(), GenError> {
    let invalid = members
        .iter()
        .find(|member| member.as_str() != NONE_MEMBER && !ident::is_enum_variant(member));
    match invalid {
        Some(member) => Err(GenError::InvalidIdentifier {
            file: file.to_string(),
            kind,
            value: member.clone(),
        }),
        None => Ok(()),
    }
}

// ============================================================================
// SECTION: Definition Input
// ============================================================================

/// Reads a definition table with size limits to avoid memory exhaustion.
fn read_definition_bytes(path: &Path) -> Result<String, GenError> {
    let file = fs::File::open(path).map_err(|err| GenError::Io(err.to_string()))?;
    let metadata = file.metadata().map_err(|err| GenError::Io(err.to_string()))?;
    if metadata.len() > MAX_DEFINITION_BYTES {
        return Err(GenError::TooLarge {
            path: path.display().to_string(),
        });
    }
    let mut bytes = Vec::new();
    let mut limited = file.take(MAX_DEFINITION_BYTES + 1);
    limited.read_to_end(&mut bytes).map_err(|err| GenError::Io(err.to_string()))?;
    let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
    if size > MAX_DEFINITION_BYTES {
        return Err(GenError::TooLarge {
            path: path.display().to_string(),
        });
    }
    String::from_utf8(bytes)
        .map_err(|_| GenError::Io(format!("{} is not valid utf-8", path.display())))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
