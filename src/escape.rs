//! HTML entity escaping for text that must stay inert.
//!
//! Escaped text parsed as markup always yields plain text nodes, never
//! elements, so it is the mechanism behind every `escape = true` insertion.

#![allow(clippy::expect_used)]

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::options::EscapeMode;

/// Characters escaped in `EscapeMode::Extended`.
static EXTENDED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[&<>'/`\x22]").expect("EXTENDED_CHARS regex"));

/// Characters escaped in `EscapeMode::Minimal`.
static MINIMAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[&<>'\x22]").expect("MINIMAL_CHARS regex"));

fn entity(ch: &str) -> &'static str {
    match ch {
        "&" => "&amp;",
        "<" => "&lt;",
        ">" => "&gt;",
        "\"" => "&quot;",
        "'" => "&#x27;",
        "/" => "&#x2F;",
        "`" => "&#x60;",
        _ => "",
    }
}

/// Escape HTML special characters in `text`.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
/// Escaping is applied exactly once per call: an already escaped `&amp;`
/// becomes `&amp;amp;`.
///
/// # Examples
///
/// ```
/// use rs_domext::{escape_html, EscapeMode};
///
/// assert_eq!(
///     escape_html("<b>Tom & Jerry</b>", EscapeMode::Extended),
///     "&lt;b&gt;Tom &amp; Jerry&lt;&#x2F;b&gt;"
/// );
/// assert_eq!(escape_html("a/b", EscapeMode::Minimal), "a/b");
/// ```
#[must_use]
pub fn escape_html(text: &str, mode: EscapeMode) -> Cow<'_, str> {
    let pattern = match mode {
        EscapeMode::Extended => &*EXTENDED_CHARS,
        EscapeMode::Minimal => &*MINIMAL_CHARS,
    };
    pattern.replace_all(text, |caps: &Captures| entity(&caps[0]))
}
