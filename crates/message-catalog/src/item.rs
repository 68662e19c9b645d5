// crates/message-catalog/src/item.rs
// ============================================================================
// Module: Message Items
// Description: A single catalog message with lazily resolved display text.
// Purpose: Pair fixed metadata with locale-dependent text.
// Dependencies: Standard library formatting and reference counting.
// ============================================================================

//! ## Overview
//! A [`MessageItem`] keeps the text baked in from its definition table plus a
//! shared handle to its catalog's override table. Display text is resolved on
//! every access: a non-empty override wins, otherwise the built-in text is
//! returned. Category, severity, and description never vary by locale.

use std::fmt;
use std::sync::Arc;

use crate::format::format_template;
use crate::overrides::OverrideTable;
use crate::overrides::SharedOverrides;

/// One addressable message of a catalog.
///
/// `C` and `S` are the category and severity types: generated enums for
/// compiled catalogs, [`Classification`](crate::Classification) for
/// data-driven ones.
///
/// # Invariants
/// - The identifier is only used for override lookup and is not exposed.
/// - Category, severity, and description are fixed at construction.
#[derive(Debug, Clone)]
pub struct MessageItem<C, S> {
    /// Identifier used to look up override text.
    id: String,
    /// Text captured from the definition table.
    text: String,
    /// Message category.
    category: C,
    /// Message severity.
    severity: S,
    /// Developer-facing description.
    description: String,
    /// Override table shared with the owning catalog.
    overrides: SharedOverrides,
}

impl<C, S> MessageItem<C, S> {
    /// Builds an item; `overrides` is shared with the owning catalog.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        category: C,
        severity: S,
        description: impl Into<String>,
        overrides: SharedOverrides,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category,
            severity,
            description: description.into(),
            overrides,
        }
    }

    /// Returns the display text, preferring a non-empty override.
    #[must_use]
    pub fn text(&self) -> &str {
        self.overrides
            .as_deref()
            .and_then(|table| table.get(&self.id))
            .filter(|text| !text.is_empty())
            .unwrap_or(&self.text)
    }

    /// Substitutes positional `args` into the display text.
    ///
    /// The template returned by [`text`](Self::text) is left unchanged.
    #[must_use]
    pub fn format(&self, args: &[&dyn fmt::Display]) -> String {
        format_template(self.text(), args)
    }

    /// Returns the message category.
    #[must_use]
    pub const fn category(&self) -> &C {
        &self.category
    }

    /// Returns the message severity.
    #[must_use]
    pub const fn severity(&self) -> &S {
        &self.severity
    }

    /// Returns the developer description; empty when none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true when the display text comes from an override table.
    #[must_use]
    pub fn is_overridden(&self) -> bool {
        self.overrides.as_deref().and_then(|table| table.get(&self.id)).is_some_and(|text| !text.is_empty())
    }

    /// Returns the override table this item resolves against.
    #[must_use]
    pub fn overrides(&self) -> Option<&Arc<OverrideTable>> {
        self.overrides.as_ref()
    }
}

impl<C, S> fmt::Display for MessageItem<C, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.text())
    }
}

/// Formats a message item with positional arguments.
///
/// # Examples
/// ```
/// use message_catalog::MessageItem;
/// use message_catalog::format_message;
///
/// let item = MessageItem::new("GREET", "Hello, {0}! You have {1} messages.", (), (), "", None);
/// assert_eq!(format_message!(item, "James", 3), "Hello, James! You have 3 messages.");
/// assert_eq!(format_message!(item), "Hello, {0}! You have {1} messages.");
/// ```
#[macro_export]
macro_rules! format_message {
    ($item:expr $(, $arg:expr )* $(,)?) => {
        $item.format(&[ $( &$arg as &dyn ::std::fmt::Display ),* ])
    };
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(entries: &[(&str, &str)]) -> SharedOverrides {
        Some(Arc::new(
            entries.iter().map(|(id, text)| ((*id).to_string(), (*text).to_string())).collect(),
        ))
    }

    #[test]
    fn builtin_text_without_overrides() {
        let item = MessageItem::new("TEST001", "Test message 1", 1_u8, 2_u8, "desc1", None);
        assert_eq!(item.text(), "Test message 1");
        assert_eq!(item.to_string(), "Test message 1");
        assert!(!item.is_overridden());
    }

    #[test]
    fn override_wins_and_metadata_is_fixed() {
        let item = MessageItem::new(
            "TEST001",
            "Test message 1",
            "Test",
            "Information",
            "desc1",
            overrides(&[("TEST001", "テストメッセージ1")]),
        );
        assert_eq!(item.text(), "テストメッセージ1");
        assert!(item.is_overridden());
        assert_eq!(*item.category(), "Test");
        assert_eq!(*item.severity(), "Information");
        assert_eq!(item.description(), "desc1");
    }

    #[test]
    fn override_for_other_id_is_ignored() {
        let item =
            MessageItem::new("TEST002", "Fallback", (), (), "", overrides(&[("TEST001", "x")]));
        assert_eq!(item.text(), "Fallback");
    }

    #[test]
    fn format_uses_resolved_text() {
        let item = MessageItem::new(
            "TEST002",
            "Test for parameter '{0}'",
            (),
            (),
            "",
            overrides(&[("TEST002", "パラメーター '{0}' のテスト")]),
        );
        assert_eq!(item.format(&[&"テスト値"]), "パラメーター 'テスト値' のテスト");
        assert_eq!(item.text(), "パラメーター '{0}' のテスト");
    }
}
