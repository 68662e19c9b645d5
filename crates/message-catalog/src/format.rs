// crates/message-catalog/src/format.rs
// ============================================================================
// Module: Positional Formatting
// Description: `{n}` placeholder substitution for message templates.
// Purpose: Render message text with caller-supplied arguments.
// Dependencies: Standard library formatting.
// ============================================================================

//! ## Overview
//! Message templates use 0-indexed positional placeholders: `{0}`, `{1}`, ...
//! A placeholder may carry an alignment (`{0,8}` right-aligns, `{0,-8}`
//! left-aligns) and a format suffix (`{0:N2}`); the suffix is accepted but
//! arguments always render through [`Display`](fmt::Display).
//!
//! ## Invariants
//! - `{{` and `}}` render literal braces.
//! - Placeholders that are malformed or out of range are copied verbatim.
//! - Formatting never panics, whatever the template.

use std::fmt;
use std::fmt::Write;

/// Largest accepted alignment width; wider placeholders are left verbatim.
const MAX_ALIGNMENT: u64 = 1_000_000;

/// Substitutes positional arguments into `template`.
///
/// # Examples
/// ```
/// use message_catalog::format_template;
///
/// assert_eq!(format_template("Hello, {0}!", &[&"James"]), "Hello, James!");
/// assert_eq!(format_template("{1}/{0} {{literal}}", &[&1, &2]), "2/1 {literal}");
/// assert_eq!(format_template("[{0,4}]", &[&"ab"]), "[  ab]");
/// assert_eq!(format_template("missing {3}", &[&"x"]), "missing {3}");
/// ```
#[must_use]
pub fn format_template(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(position) = rest.find(['{', '}']) {
        out.push_str(&rest[.. position]);
        let tail = &rest[position ..];
        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[.. 1]);
            rest = &tail[2 ..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1 ..];
            continue;
        }
        match tail.find('}') {
            Some(end) => {
                let body = &tail[1 .. end];
                match Placeholder::parse(body).and_then(|placeholder| {
                    args.get(placeholder.index).map(|arg| (placeholder, *arg))
                }) {
                    Some((placeholder, arg)) => placeholder.render(&mut out, arg),
                    None => out.push_str(&tail[..= end]),
                }
                rest = &tail[end + 1 ..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// A parsed `{index[,alignment][:format]}` placeholder body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder {
    /// Argument position.
    index: usize,
    /// Minimum width; negative values pad on the right.
    alignment: i64,
}

impl Placeholder {
    /// Parses a placeholder body without its braces.
    fn parse(body: &str) -> Option<Self> {
        let head = body.split_once(':').map_or(body, |(head, _)| head);
        let (index, alignment) = match head.split_once(',') {
            Some((index, alignment)) => (index, alignment.trim().parse::<i64>().ok()?),
            None => (head, 0),
        };
        if alignment.unsigned_abs() > MAX_ALIGNMENT {
            return None;
        }
        let index = index.trim();
        if index.is_empty() || !index.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            index: index.parse().ok()?,
            alignment,
        })
    }

    /// Appends `arg`, padded according to the alignment.
    ///
    /// The argument is rendered first so padding applies even to `Display`
    /// impls that ignore width flags.
    fn render(self, out: &mut String, arg: &dyn fmt::Display) {
        let text = arg.to_string();
        let width = usize::try_from(self.alignment.unsigned_abs()).unwrap_or(0);
        let _ = if self.alignment < 0 {
            write!(out, "{text:<width$}")
        } else {
            write!(out, "{text:>width$}")
        };
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_in_any_order_and_repeats() {
        assert_eq!(format_template("{1} {0} {1}", &[&"a", &"b"]), "b a b");
    }

    #[test]
    fn escaped_braces_render_literally() {
        assert_eq!(format_template("{{0}} is {0}", &[&"x"]), "{0} is x");
    }

    #[test]
    fn left_alignment_pads_right() {
        assert_eq!(format_template("[{0,-4}]", &[&"ab"]), "[ab  ]");
    }

    #[test]
    fn format_suffix_is_ignored() {
        assert_eq!(format_template("{0:N2}", &[&10]), "10");
    }

    #[test]
    fn malformed_placeholders_are_verbatim() {
        assert_eq!(format_template("{name} {0", &[&"x"]), "{name} {0");
        assert_eq!(format_template("{} {-1} {0,x}", &[&"x"]), "{} {-1} {0,x}");
        assert_eq!(format_template("stray } brace", &[]), "stray } brace");
        assert_eq!(format_template("{0,2000000}", &[&"x"]), "{0,2000000}");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(format_template("Plain text", &[&"unused"]), "Plain text");
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(format_template("パラメーター '{0}' のテスト", &[&"テスト値"]), "パラメーター 'テスト値' のテスト");
    }
}
