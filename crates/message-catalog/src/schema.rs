// crates/message-catalog/src/schema.rs
// ============================================================================
// Module: Catalog Schema
// Description: Category and severity value sets derived from a table.
// Purpose: Provide the closed enumerations shared by generated and runtime catalogs.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every definition table yields its own pair of closed enumerations. Members
//! are the distinct non-empty values seen across all rows, sorted by ordinal
//! string order, and always led by the implicit `None` member at index zero.
//!
//! ## Invariants
//! - `members()[0]` is always [`NONE_MEMBER`].
//! - Members are unique; a literal `None` in the table folds into index zero.
//! - Two schemas never share state; each table is derived independently.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::table::MessageDefinition;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Name of the implicit default member of every enumeration.
pub const NONE_MEMBER: &str = "None";

// ============================================================================
// SECTION: Types
// ============================================================================

/// A closed, ordered set of classification names.
///
/// # Invariants
/// - The first member is [`NONE_MEMBER`].
/// - Remaining members are sorted ascending and unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enumeration {
    /// Members in declaration order.
    members: Vec<String>,
}

impl Enumeration {
    /// Builds an enumeration from raw column values.
    ///
    /// Empty values and literal `None` map to the implicit member.
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let distinct: BTreeSet<&str> = values
            .into_iter()
            .filter(|value| !value.is_empty() && *value != NONE_MEMBER)
            .collect();
        let mut members = Vec::with_capacity(distinct.len() + 1);
        members.push(NONE_MEMBER.to_string());
        members.extend(distinct.into_iter().map(str::to_string));
        Self {
            members,
        }
    }

    /// Returns members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Returns the number of members, including `None`.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: `None` is a member of every enumeration.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true when `value` names a member (empty counts as `None`).
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.ordinal(value).is_some()
    }

    /// Returns the declaration index of `value`, treating empty as `None`.
    #[must_use]
    pub fn ordinal(&self, value: &str) -> Option<usize> {
        let name = if value.is_empty() { NONE_MEMBER } else { value };
        self.members.iter().position(|member| member == name)
    }

    /// Resolves `value` into a [`Classification`], treating empty as `None`.
    #[must_use]
    pub fn classify(&self, value: &str) -> Option<Classification> {
        let ordinal = self.ordinal(value)?;
        let name = self.members.get(ordinal)?.clone();
        Some(Classification {
            ordinal,
            name,
        })
    }
}

/// Category and severity enumerations of one definition table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSchema {
    /// Category enumeration.
    pub categories: Enumeration,
    /// Severity enumeration.
    pub severities: Enumeration,
}

impl CatalogSchema {
    /// Derives both enumerations from parsed rows.
    ///
    /// # Examples
    /// ```
    /// use message_catalog::CatalogSchema;
    /// use message_catalog::table::parse_definitions;
    ///
    /// let rows = parse_definitions("Id\tText\tSeverity\nA\ta\tWarning\nB\tb\tError\n")?;
    /// let schema = CatalogSchema::derive(&rows);
    /// assert_eq!(schema.severities.members(), ["None", "Error", "Warning"]);
    /// assert_eq!(schema.categories.members(), ["None"]);
    /// # Ok::<(), message_catalog::TableError>(())
    /// ```
    #[must_use]
    pub fn derive(definitions: &[MessageDefinition]) -> Self {
        Self {
            categories: Enumeration::from_values(
                definitions.iter().map(|definition| definition.category.as_str()),
            ),
            severities: Enumeration::from_values(
                definitions.iter().map(|definition| definition.severity.as_str()),
            ),
        }
    }
}

/// A member of a runtime [`Enumeration`].
///
/// Used as the category and severity type of data-driven catalogs, where no
/// generated enum exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Classification {
    /// Declaration index within the owning enumeration.
    ordinal: usize,
    /// Member name.
    name: String,
}

impl Classification {
    /// Returns the declaration index; `0` is `None`.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Returns the member name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Returns true for the implicit `None` member.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.ordinal == 0
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            ordinal: 0,
            name: NONE_MEMBER.to_string(),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only assertions are permitted.")]

    use super::*;

    #[test]
    fn members_are_sorted_and_led_by_none() {
        let enumeration = Enumeration::from_values(["Warning", "", "Error", "Warning", "None"]);
        assert_eq!(enumeration.members(), ["None", "Error", "Warning"]);
        assert_eq!(enumeration.ordinal(""), Some(0));
        assert_eq!(enumeration.ordinal("Warning"), Some(2));
        assert!(!enumeration.contains("Fatal"));
    }

    #[test]
    fn ordering_is_ordinal_not_case_folded() {
        let enumeration = Enumeration::from_values(["beta", "Alpha", "alpha"]);
        assert_eq!(enumeration.members(), ["None", "Alpha", "alpha", "beta"]);
    }

    #[test]
    fn empty_columns_yield_only_none() {
        let enumeration = Enumeration::from_values(["", ""]);
        assert_eq!(enumeration.members(), ["None"]);
        assert!(!enumeration.is_empty());
        let none = enumeration.classify("").unwrap();
        assert!(none.is_none());
        assert_eq!(none, Classification::default());
    }

    #[test]
    fn classify_rejects_unknown_members() {
        let enumeration = Enumeration::from_values(["Test"]);
        assert_eq!(enumeration.classify("Test").unwrap().to_string(), "Test");
        assert!(enumeration.classify("Other").is_none());
    }
}
