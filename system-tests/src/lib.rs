// system-tests/src/lib.rs
// ============================================================================
// Module: System Test Catalogs
// Description: Catalogs generated from the fixture tables in data/.
// Purpose: Give the system tests compiled catalogs to exercise.
// Dependencies: message-catalog (generated code)
// ============================================================================

//! ## Overview
//! The build script compiles every `data/*messages.tsv` table. This crate
//! exposes the result:
//! - `DefaultMessageCatalog` from `messages.tsv`;
//! - `ValidationMessageCatalog` from `Validation_messages.tsv`;
//! - `PlainMessageCatalog` from `Plain_messages.tsv`, which has no
//!   classification columns.
//!
//! Localized `*_ja.tsv` tables are override inputs, not catalogs.

include!(concat!(env!("OUT_DIR"), "/message_catalogs.rs"));
