// crates/message-catalog-gen/src/ident.rs
// ============================================================================
// Module: Identifier Validation
// Description: Checks that table values can be emitted as Rust identifiers.
// Purpose: Reject tables that would generate uncompilable code.
// Dependencies: unicode-ident
// ============================================================================

//! ## Overview
//! Message ids become struct fields and classification values become enum
//! variants, so both must be plain Rust identifiers. Raw identifiers are not
//! emitted; keywords are rejected instead. Character classes follow the
//! `XID_Start` and `XID_Continue` properties the Rust lexer uses.

use unicode_ident::is_xid_continue;
use unicode_ident::is_xid_start;

/// Keywords that cannot be used as plain identifiers in edition 2024.
const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Associated constants emitted on every classification enum.
const ENUM_ASSOCIATED_ITEMS: &[&str] = &["ALL"];

/// Returns true when `value` is a non-keyword Rust identifier.
pub(crate) fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(is_xid_start(first) || first == '_') {
        return false;
    }
    if value == "_" || KEYWORDS.contains(&value) {
        return false;
    }
    chars.all(is_xid_continue)
}

/// Returns true when `value` can be emitted as a classification enum variant.
///
/// Variants named like an emitted associated constant would shadow it.
pub(crate) fn is_enum_variant(value: &str) -> bool {
    is_identifier(value) && !ENUM_ASSOCIATED_ITEMS.contains(&value)
}

/// Returns true when `value` is a module path such as `::message_catalog`.
///
/// Path segments may be `crate`, `self`, or `super` in leading position.
pub(crate) fn is_module_path(value: &str) -> bool {
    let trimmed = value.strip_prefix("::").unwrap_or(value);
    if trimmed.is_empty() {
        return false;
    }
    trimmed.split("::").enumerate().all(|(index, segment)| {
        is_identifier(segment)
            || (!value.starts_with("::")
                && matches!(segment, "crate" | "self" | "super")
                && (index == 0 || segment == "super"))
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
