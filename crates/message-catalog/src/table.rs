// crates/message-catalog/src/table.rs
// ============================================================================
// Module: Definition Table Parser
// Description: Tab-separated message definition parsing.
// Purpose: Turn raw definition tables into ordered message definitions.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Definition tables are UTF-8, tab-separated files whose first non-empty line
//! is a header. Columns are matched by exact name, so their order in the file is
//! irrelevant. `Id` and `Text` are required; `Category`, `Severity`, and
//! `Description` default to empty when absent.
//!
//! ## Invariants
//! - Output preserves the original row order.
//! - Rows with an empty `Id` are skipped, never reported.
//! - Short rows yield empty fields instead of failing.
//! - Placeholder syntax inside `Text` is not inspected here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Field delimiter used by definition and override tables.
pub const FIELD_DELIMITER: char = '\t';

/// Header name of the identifier column.
pub const ID_COLUMN: &str = "Id";
/// Header name of the message text column.
pub const TEXT_COLUMN: &str = "Text";
/// Header name of the category column.
pub const CATEGORY_COLUMN: &str = "Category";
/// Header name of the severity column.
pub const SEVERITY_COLUMN: &str = "Severity";
/// Header name of the developer description column.
pub const DESCRIPTION_COLUMN: &str = "Description";

/// Byte order mark some editors prepend to UTF-8 exports.
const BOM: char = '\u{feff}';

// ============================================================================
// SECTION: Types
// ============================================================================

/// One row of a definition table.
///
/// # Invariants
/// - `id` is non-empty once produced by [`parse_definitions`].
/// - Empty `category` / `severity` mean the implicit `None` member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MessageDefinition {
    /// Message identifier, used as field name and lookup key.
    pub id: String,
    /// Positional-placeholder template shown to users.
    pub text: String,
    /// Category name, empty when unclassified.
    pub category: String,
    /// Severity name, empty when unclassified.
    pub severity: String,
    /// Developer-facing description, never overridden at runtime.
    pub description: String,
}

impl MessageDefinition {
    /// Returns the category, substituting `None` for an empty value.
    #[must_use]
    pub fn category_or_none(&self) -> &str {
        or_none(&self.category)
    }

    /// Returns the severity, substituting `None` for an empty value.
    #[must_use]
    pub fn severity_or_none(&self) -> &str {
        or_none(&self.severity)
    }
}

/// Structural errors that make a table unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Fewer than a header plus one data row.
    #[error("table needs a header row and at least one data row")]
    TooShort,
    /// The header lacks a required column.
    #[error("header is missing required column `{0}`")]
    MissingColumn(&'static str),
}

/// Column positions resolved from a header line.
///
/// # Invariants
/// - `id` and `text` always refer to columns present in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    /// Position of the `Id` column.
    pub(crate) id: usize,
    /// Position of the `Text` column.
    pub(crate) text: usize,
    /// Position of the `Category` column, if present.
    pub(crate) category: Option<usize>,
    /// Position of the `Severity` column, if present.
    pub(crate) severity: Option<usize>,
    /// Position of the `Description` column, if present.
    pub(crate) description: Option<usize>,
}

impl ColumnMap {
    /// Resolves column positions from the header line.
    ///
    /// Duplicate header names resolve to their first occurrence.
    pub(crate) fn from_header(header: &str) -> Result<Self, TableError> {
        let names: Vec<&str> = header.split(FIELD_DELIMITER).collect();
        let position = |name: &str| names.iter().position(|candidate| *candidate == name);
        let id = position(ID_COLUMN).ok_or(TableError::MissingColumn(ID_COLUMN))?;
        let text = position(TEXT_COLUMN).ok_or(TableError::MissingColumn(TEXT_COLUMN))?;
        Ok(Self {
            id,
            text,
            category: position(CATEGORY_COLUMN),
            severity: position(SEVERITY_COLUMN),
            description: position(DESCRIPTION_COLUMN),
        })
    }

    /// Builds a definition from one data line.
    pub(crate) fn definition(&self, line: &str) -> MessageDefinition {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        MessageDefinition {
            id: field(&fields, Some(self.id)),
            text: field(&fields, Some(self.text)),
            category: field(&fields, self.category),
            severity: field(&fields, self.severity),
            description: field(&fields, self.description),
        }
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a definition table into ordered message definitions.
///
/// # Errors
///
/// Returns [`TableError::TooShort`] when the table has no data rows and
/// [`TableError::MissingColumn`] when `Id` or `Text` is absent from the header.
///
/// # Examples
/// ```
/// use message_catalog::table::parse_definitions;
///
/// let table = "Id\tText\tSeverity\nMSG001\tHello, {0}!\tInformation\n";
/// let rows = parse_definitions(table)?;
/// assert_eq!(rows[0].id, "MSG001");
/// assert_eq!(rows[0].category_or_none(), "None");
/// # Ok::<(), message_catalog::TableError>(())
/// ```
pub fn parse_definitions(content: &str) -> Result<Vec<MessageDefinition>, TableError> {
    let (columns, rows) = split_table(content)?;
    Ok(rows
        .into_iter()
        .map(|line| columns.definition(line))
        .filter(|definition| !definition.id.is_empty())
        .collect())
}

/// Splits a table into its resolved header and remaining data lines.
pub(crate) fn split_table(content: &str) -> Result<(ColumnMap, Vec<&str>), TableError> {
    let lines = table_lines(content);
    let Some((header, rows)) = lines.split_first() else {
        return Err(TableError::TooShort);
    };
    if rows.is_empty() {
        return Err(TableError::TooShort);
    }
    let columns = ColumnMap::from_header(header)?;
    Ok((columns, rows.to_vec()))
}

/// Returns the non-empty lines of a table, without a leading BOM.
pub(crate) fn table_lines(content: &str) -> Vec<&str> {
    content
        .strip_prefix(BOM)
        .unwrap_or(content)
        .split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .collect()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads a field by optional position, defaulting to empty.
fn field(fields: &[&str], index: Option<usize>) -> String {
    index.and_then(|index| fields.get(index)).map_or_else(String::new, |value| (*value).to_string())
}

/// Maps an empty classification value to `None`.
fn or_none(value: &str) -> &str {
    if value.is_empty() { crate::schema::NONE_MEMBER } else { value }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        reason = "Test-only assertions are permitted."
    )]

    use super::*;

    #[test]
    fn header_columns_match_in_any_order() {
        let table = "Severity\tDescription\tText\tId\tCategory\nWarning\tdesc\tHello\tMSG001\tTest\n";
        let rows = parse_definitions(table).unwrap();
        assert_eq!(
            rows,
            vec![MessageDefinition {
                id: "MSG001".to_string(),
                text: "Hello".to_string(),
                category: "Test".to_string(),
                severity: "Warning".to_string(),
                description: "desc".to_string(),
            }]
        );
    }

    #[test]
    fn missing_required_columns_fail() {
        assert_eq!(parse_definitions("Text\nHello\n"), Err(TableError::MissingColumn(ID_COLUMN)));
        assert_eq!(parse_definitions("Id\nMSG\n"), Err(TableError::MissingColumn(TEXT_COLUMN)));
    }

    #[test]
    fn header_only_table_is_too_short() {
        assert_eq!(parse_definitions("Id\tText\n\n\r\n"), Err(TableError::TooShort));
        assert_eq!(parse_definitions(""), Err(TableError::TooShort));
    }

    #[test]
    fn empty_ids_are_skipped_and_short_rows_default() {
        let table = "Id\tText\tCategory\n\torphan\tTest\nMSG002\nMSG003\tThird\n";
        let rows = parse_definitions(table).unwrap();
        let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, ["MSG002", "MSG003"]);
        assert_eq!(rows[0].text, "");
        assert_eq!(rows[0].category_or_none(), "None");
        assert_eq!(rows[1].severity_or_none(), "None");
    }

    #[test]
    fn crlf_line_endings_and_bom_are_tolerated() {
        let table = "\u{feff}Id\tText\r\nMSG001\tOne\r\n\r\nMSG002\tTwo\r\n";
        let rows = parse_definitions(table).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].text, "Two");
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let table = "Id\tOwner\tText\nMSG001\tteam-a\tHello\n";
        let rows = parse_definitions(table).unwrap();
        assert_eq!(rows[0].text, "Hello");
        assert_eq!(rows[0].description, "");
    }
}
