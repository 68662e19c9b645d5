// crates/message-catalog-gen/src/render.rs
// ============================================================================
// Module: Catalog Rendering
// Description: Emits Rust source for one compiled message catalog.
// Purpose: Turn validated definitions into enums, an item alias, and a struct.
// Dependencies: message-catalog
// ============================================================================

//! ## Overview
//! Rendering is a single deterministic pass over validated rows. Output
//! order follows the definition table for messages and the enumeration
//! order for categories and severities, so identical input always yields
//! byte-identical source.
//!
//! Every emitted item carries documentation so generated code compiles
//! cleanly under `missing_docs`.

use message_catalog::Enumeration;
use message_catalog::schema::NONE_MEMBER;

use crate::CatalogGenerator;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// First line of every generated file.
pub(crate) const GENERATED_MARKER: &str = "// @generated by message-catalog-gen. DO NOT EDIT.\n";

/// Indentation unit of generated code.
const INDENT: &str = "    ";

// ============================================================================
// SECTION: File Layout
// ============================================================================

/// Writes the generated-file banner listing the definition tables.
pub(crate) fn render_header<'a>(out: &mut String, sources: impl IntoIterator<Item = &'a str>) {
    out.push_str(GENERATED_MARKER);
    for source in sources {
        out.push_str("// Source: ");
        out.push_str(&code_span(source));
        out.push('\n');
    }
}

/// Writes every item generated for one catalog.
pub(crate) fn render_catalog(out: &mut String, generator: &CatalogGenerator) {
    let name = generator.name();
    let schema = generator.schema();
    let source = code_span(name.source_file());
    out.push('\n');
    render_enum(
        out,
        &name.category_type(),
        &format!("Message categories declared by `{source}`."),
        "category",
        &schema.categories,
    );
    out.push('\n');
    render_enum(
        out,
        &name.severity_type(),
        &format!("Message severities declared by `{source}`."),
        "severity",
        &schema.severities,
    );
    out.push('\n');
    render_item_alias(out, generator);
    out.push('\n');
    render_catalog_struct(out, generator);
    out.push('\n');
    render_catalog_impl(out, generator);
}

// ============================================================================
// SECTION: Enumerations
// ============================================================================

/// Writes one classification enum with its `ALL`, `as_str`, and `Display`.
fn render_enum(out: &mut String, type_name: &str, doc: &str, label: &str, members: &Enumeration) {
    push_doc(out, "", doc);
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]\n");
    out.push_str("pub enum ");
    out.push_str(type_name);
    out.push_str(" {\n");
    for member in members.members() {
        if member == NONE_MEMBER {
            push_doc(out, INDENT, &format!("No {label}."));
            out.push_str(INDENT);
            out.push_str("#[default]\n");
        } else {
            push_doc(out, INDENT, &format!("`{member}` {label}."));
        }
        out.push_str(INDENT);
        out.push_str(member);
        out.push_str(",\n");
    }
    out.push_str("}\n\nimpl ");
    out.push_str(type_name);
    out.push_str(" {\n");
    push_doc(out, INDENT, "Every member in declaration order.");
    out.push_str(INDENT);
    out.push_str("pub const ALL: &'static [Self] = &[");
    let variants: Vec<String> =
        members.members().iter().map(|member| format!("Self::{member}")).collect();
    out.push_str(&variants.join(", "));
    out.push_str("];\n\n");
    push_doc(out, INDENT, "Returns the member name as written in the definition table.");
    out.push_str(INDENT);
    out.push_str("#[must_use]\n");
    out.push_str(INDENT);
    out.push_str("pub const fn as_str(self) -> &'static str {\n");
    out.push_str("        match self {\n");
    for member in members.members() {
        out.push_str("            Self::");
        out.push_str(member);
        out.push_str(" => ");
        out.push_str(&rust_string_literal(member));
        out.push_str(",\n");
    }
    out.push_str("        }\n    }\n}\n\nimpl ::std::fmt::Display for ");
    out.push_str(type_name);
    out.push_str(" {\n");
    out.push_str(
        "    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {\n",
    );
    out.push_str("        f.pad(self.as_str())\n    }\n}\n");
}

// ============================================================================
// SECTION: Catalog Type
// ============================================================================

/// Writes the item type alias.
fn render_item_alias(out: &mut String, generator: &CatalogGenerator) {
    let name = generator.name();
    push_doc(out, "", &format!("Message item of [`{}`].", name.catalog_type()));
    out.push_str("pub type ");
    out.push_str(&name.item_type());
    out.push_str(" = ");
    out.push_str(generator.runtime_path());
    out.push_str("::MessageItem<");
    out.push_str(&name.category_type());
    out.push_str(", ");
    out.push_str(&name.severity_type());
    out.push_str(">;\n");
}

/// Writes the catalog struct with one documented field per message.
fn render_catalog_struct(out: &mut String, generator: &CatalogGenerator) {
    let name = generator.name();
    let item_type = name.item_type();
    push_doc(
        out,
        "",
        &format!("Messages declared by `{}`.", code_span(name.source_file())),
    );
    push_doc(out, "", "");
    push_doc(
        out,
        "",
        "Each field is one message. Display text resolves against the override table given at \
         construction; the remaining metadata is fixed.",
    );
    out.push_str("#[derive(Debug, Clone)]\n");
    out.push_str(
        "#[allow(non_snake_case, reason = \"Field names are message ids from the definition \
         table.\")]\n",
    );
    out.push_str("pub struct ");
    out.push_str(&name.catalog_type());
    out.push_str(" {\n");
    for definition in generator.definitions() {
        push_doc(out, INDENT, &normalize_doc(&definition.text));
        push_doc(out, INDENT, "");
        push_doc(out, INDENT, &format!("- Severity: `{}`", definition.severity_or_none()));
        push_doc(out, INDENT, &format!("- Category: `{}`", definition.category_or_none()));
        if !definition.description.trim().is_empty() {
            push_doc(
                out,
                INDENT,
                &format!("- Description: {}", normalize_doc(&definition.description)),
            );
        }
        out.push_str(INDENT);
        out.push_str("pub ");
        out.push_str(&definition.id);
        out.push_str(": ");
        out.push_str(&item_type);
        out.push_str(",\n");
    }
    out.push_str("}\n");
}

/// Writes constructors, lookups, and `Default` for the catalog struct.
#[allow(
    clippy::too_many_lines,
    reason = "Generator output is assembled in one pass for determinism."
)]
fn render_catalog_impl(out: &mut String, generator: &CatalogGenerator) {
    let name = generator.name();
    let runtime = generator.runtime_path();
    let catalog_type = name.catalog_type();
    let item_type = name.item_type();
    let category_type = name.category_type();
    let severity_type = name.severity_type();
    let definitions = generator.definitions();

    out.push_str("impl ");
    out.push_str(&catalog_type);
    out.push_str(" {\n");

    push_doc(out, INDENT, "Definition table this catalog was generated from.");
    out.push_str("    pub const SOURCE_FILE: &'static str = ");
    out.push_str(&rust_string_literal(name.source_file()));
    out.push_str(";\n\n");

    push_doc(out, INDENT, "Message ids in definition order.");
    out.push_str("    pub const IDS: &'static [&'static str] = &[");
    let ids: Vec<String> =
        definitions.iter().map(|definition| rust_string_literal(&definition.id)).collect();
    out.push_str(&ids.join(", "));
    out.push_str("];\n\n");

    push_doc(out, INDENT, "Builds the catalog, loading overrides from `path`.");
    push_doc(out, INDENT, "");
    push_doc(
        out,
        INDENT,
        "Without a path the definition file name is used. A missing or malformed override \
         table leaves the built-in text in place.",
    );
    out.push_str("    #[must_use]\n");
    out.push_str("    pub fn new(path: ::std::option::Option<&::std::path::Path>) -> Self {\n");
    out.push_str("        Self::with_overrides(");
    out.push_str(runtime);
    out.push_str("::OverrideTable::open(path, Self::SOURCE_FILE))\n    }\n\n");

    push_doc(
        out,
        INDENT,
        &format!(
            "Builds the catalog with overrides from the localized table, e.g. `{}` for `ja`.",
            code_span(&name.localized_file("ja"))
        ),
    );
    out.push_str("    #[must_use]\n");
    out.push_str("    pub fn for_locale(locale: &str) -> Self {\n");
    out.push_str("        let file = ");
    out.push_str(runtime);
    out.push_str("::naming::localized_file_name(Self::SOURCE_FILE, locale);\n");
    out.push_str(
        "        Self::new(::std::option::Option::Some(::std::path::Path::new(&file)))\n    }\n\n",
    );

    push_doc(out, INDENT, "Builds the catalog around an already loaded override table.");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub fn with_overrides(overrides: ");
    out.push_str(runtime);
    out.push_str("::SharedOverrides) -> Self {\n");
    out.push_str("        Self {\n");
    for definition in definitions {
        out.push_str("            ");
        out.push_str(&definition.id);
        out.push_str(": ");
        out.push_str(runtime);
        out.push_str("::MessageItem::new(\n");
        push_argument(out, &rust_string_literal(&definition.id));
        push_argument(out, &rust_string_literal(&definition.text));
        push_argument(out, &format!("{category_type}::{}", definition.category_or_none()));
        push_argument(out, &format!("{severity_type}::{}", definition.severity_or_none()));
        push_argument(out, &rust_string_literal(&definition.description));
        push_argument(out, "::std::clone::Clone::clone(&overrides)");
        out.push_str("            ),\n");
    }
    out.push_str("        }\n    }\n\n");

    push_doc(out, INDENT, "Looks up a message by id.");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub fn get(&self, id: &str) -> ::std::option::Option<&");
    out.push_str(&item_type);
    out.push_str("> {\n        match id {\n");
    for definition in definitions {
        out.push_str("            ");
        out.push_str(&rust_string_literal(&definition.id));
        out.push_str(" => ::std::option::Option::Some(&self.");
        out.push_str(&definition.id);
        out.push_str("),\n");
    }
    out.push_str("            _ => ::std::option::Option::None,\n        }\n    }\n\n");

    push_doc(out, INDENT, "Iterates `(id, item)` pairs in definition order.");
    out.push_str("    pub fn iter(&self) -> impl ::std::iter::Iterator<Item = (&'static str, &");
    out.push_str(&item_type);
    out.push_str(")> {\n        [\n");
    for definition in definitions {
        out.push_str("            (");
        out.push_str(&rust_string_literal(&definition.id));
        out.push_str(", &self.");
        out.push_str(&definition.id);
        out.push_str("),\n");
    }
    out.push_str("        ]\n        .into_iter()\n    }\n}\n\n");

    out.push_str("impl ::std::default::Default for ");
    out.push_str(&catalog_type);
    out.push_str(" {\n");
    out.push_str("    fn default() -> Self {\n");
    out.push_str("        Self::new(::std::option::Option::None)\n    }\n}\n");
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Writes one `///` line at the given indentation.
fn push_doc(out: &mut String, indent: &str, text: &str) {
    out.push_str(indent);
    out.push_str("///");
    if !text.is_empty() {
        out.push(' ');
        out.push_str(text);
    }
    out.push('\n');
}

/// Writes one constructor argument line.
fn push_argument(out: &mut String, value: &str) {
    out.push_str("                ");
    out.push_str(value);
    out.push_str(",\n");
}

/// Collapses whitespace and escapes Markdown so table text is inert in docs.
pub(crate) fn normalize_doc(value: &str) -> String {
    let collapsed = value
        .split(|ch: char| ch.is_whitespace() || ch.is_control())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let mut escaped = String::with_capacity(collapsed.len());
    for ch in collapsed.chars() {
        if matches!(ch, '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Strips characters that would end a code span or a comment line.
fn code_span(value: &str) -> String {
    value.chars().filter(|ch| *ch != '`' && !ch.is_control()).collect()
}

/// Renders a value as a Rust string literal.
pub(crate) fn rust_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for ch in value.chars() {
        match ch {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            '\0' => literal.push_str("\\0"),
            ch if ch.is_control() => {
                literal.push_str(&format!("\\u{{{:x}}}", u32::from(ch)));
            }
            ch => literal.push(ch),
        }
    }
    literal.push('"');
    literal
}

// ============================================================================
// SECTION: Tests
// ============================================================================
