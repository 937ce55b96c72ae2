//! Minimal inline template renderer.
//!
//! Supports the subset of ERB that function tests reach for:
//!
//! - literal text, copied through unchanged
//! - `<%= @name %>` interpolates a scope variable
//! - `<%# ... %>` comments, dropped
//! - `<%%` for a literal `<%`
//! - `-%>` swallows one following newline
//!
//! Ruby code blocks (`<% ... %>`) are not evaluated and are an error.

use crate::Scope;
use stagehand_types::{FixtureError, Result};

const OPEN: &str = "<%";
const CLOSE: &str = "%>";

/// Render `source` against `scope`.
pub fn render(source: &str, scope: &Scope) -> Result<String> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        if let Some(tail) = after_open.strip_prefix('%') {
            out.push_str(OPEN);
            rest = tail;
            continue;
        }

        let end = after_open
            .find(CLOSE)
            .ok_or_else(|| FixtureError::Template(format!("unclosed tag at byte {start}")))?;
        let (body, trim) = match after_open[..end].strip_suffix('-') {
            Some(body) => (body, true),
            None => (&after_open[..end], false),
        };
        rest = &after_open[end + CLOSE.len()..];
        if trim {
            rest = rest.strip_prefix('\n').unwrap_or(rest);
        }

        if body.starts_with('#') {
            continue;
        }
        let Some(expr) = body.strip_prefix('=') else {
            return Err(FixtureError::Template(format!(
                "code tags are not supported: <%{body}%>"
            )));
        };
        out.push_str(&eval_expr(expr.trim(), scope)?);
    }

    out.push_str(rest);
    Ok(out)
}

fn eval_expr(expr: &str, scope: &Scope) -> Result<String> {
    let name = expr
        .strip_prefix('@')
        .filter(|name| is_identifier(name))
        .ok_or_else(|| FixtureError::Template(format!("unsupported expression: {expr}")))?;
    Ok(scope.lookupvar(name).to_string())
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
