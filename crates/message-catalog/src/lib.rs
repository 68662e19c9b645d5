// crates/message-catalog/src/lib.rs
// ============================================================================
// Module: Message Catalog Runtime
// Description: Runtime support for TSV-defined, locally overridable messages.
// Purpose: Back generated and data-driven catalogs with one item model.
// Dependencies: serde, thiserror, tracing
// ============================================================================

//! ## Overview
//! A message catalog is the fixed set of user-facing messages declared by one
//! tab-separated definition table. Each message carries text, a category, a
//! severity, and an optional developer description. The text can be replaced
//! at runtime by an override table (for example `messages_ja.tsv`) without
//! touching the metadata.
//!
//! Catalogs come in two flavours sharing [`MessageItem`]:
//! - compiled catalogs, emitted by `message-catalog-gen` from a build script,
//!   with one typed field per message and generated category/severity enums;
//! - [`MessageCatalog`], built from a definition table at program start and
//!   addressed by identifier.
//!
//! ## Invariants
//! - Override tables are loaded once per catalog and never mutated.
//! - Missing or malformed override tables never fail catalog construction.
//! - Category, severity, and description do not vary with the override table.
//!
//! ## Index
//! - Parsing: [`table`], [`schema`], [`naming`]
//! - Runtime: [`MessageItem`], [`OverrideTable`], [`format_template`], [`MessageCatalog`]

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod format;
pub mod item;
pub mod naming;
pub mod overrides;
pub mod schema;
pub mod table;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::CatalogError;
pub use catalog::DynamicMessageItem;
pub use catalog::MessageCatalog;
pub use format::format_template;
pub use item::MessageItem;
pub use naming::CatalogName;
pub use overrides::OverrideTable;
pub use overrides::SharedOverrides;
pub use schema::CatalogSchema;
pub use schema::Classification;
pub use schema::Enumeration;
pub use table::MessageDefinition;
pub use table::TableError;
