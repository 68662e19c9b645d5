//! Table parsing and formatting property-based tests.
//!
//! ## Purpose
//! These tests feed arbitrary text to the definition parser, the override
//! parser, and the placeholder formatter to ensure none of them panic.
//!
//! ## What is covered
//! - Arbitrary table text parses or fails with a structural error.
//! - Parsed rows never carry an empty id.
//! - Arbitrary templates format without panic, and templates without braces
//!   are returned unchanged.
// crates/message-catalog/tests/proptest_parsing.rs
// ============================================================================
// Module: Parsing Property-Based Tests
// Description: Fuzz-like checks for table parsing and template formatting.
// Purpose: Ensure untrusted tables and templates never cause panics.
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use message_catalog::MessageCatalog;
use message_catalog::OverrideTable;
use message_catalog::format_template;
use message_catalog::table::parse_definitions;
use proptest::prelude::*;

proptest! {
    #[test]
    fn definition_parser_never_panics(content in "(Id|Text|Category|\t|\n|\r|[a-zA-Z0-9 {}]){0,200}") {
        if let Ok(rows) = parse_definitions(&content) {
            prop_assert!(rows.iter().all(|row| !row.id.is_empty()));
        }
    }

    #[test]
    fn override_parser_never_panics(content in "\\PC{0,200}") {
        if let Some(table) = OverrideTable::parse(&content) {
            prop_assert!(table.len() <= content.split(['\r', '\n']).count());
        }
    }

    #[test]
    fn catalog_builds_or_fails_cleanly(rows in prop::collection::vec(("[A-Z]{1,3}", "[a-z {}0-9]{0,12}"), 1..8)) {
        let mut content = String::from("Id\tText\n");
        for (id, text) in &rows {
            content.push_str(id);
            content.push('\t');
            content.push_str(text);
            content.push('\n');
        }
        let result = MessageCatalog::from_source("messages.tsv", &content, Some(std::path::Path::new("absent.tsv")));
        if let Ok(catalog) = result {
            prop_assert_eq!(catalog.len(), rows.len());
        }
    }

    #[test]
    fn formatter_never_panics(template in "[a-z{},0-9:-]{0,64}", arg in "\\PC{0,16}") {
        let _ = format_template(&template, &[&arg, &42]);
    }

    #[test]
    fn brace_free_templates_are_unchanged(template in "[^{}]{0,64}") {
        prop_assert_eq!(format_template(&template, &[&"x"]), template);
    }
}
