//! Configuration options for tree operations.
//!
//! The `Options` struct is handed to [`DomExt`](crate::DomExt) once at setup
//! time and controls escaping and diagnostics for every verb.

use serde::{Deserialize, Serialize};

/// Which characters [`escape_html`](crate::escape_html) replaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    /// Escape `&`, `<`, `>`, `"`, `'`, `/` and `` ` ``.
    ///
    /// Safe for text and for unquoted attribute contexts.
    #[default]
    Extended,

    /// Escape only `&`, `<`, `>`, `"` and `'`.
    Minimal,
}

/// Configuration options for tree operations.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_domext::{EscapeMode, Options};
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     escape_mode: EscapeMode::Minimal,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Character set used when content is inserted escaped.
    ///
    /// Default: `EscapeMode::Extended`
    pub escape_mode: EscapeMode,

    /// Log malformed selectors at `warn` level instead of `debug`.
    ///
    /// Malformed selectors never fail an operation; they are treated as
    /// matching nothing. This only controls how loudly that is reported.
    ///
    /// Default: `true`
    pub warn_on_invalid_selector: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            escape_mode: EscapeMode::Extended,
            warn_on_invalid_selector: true,
        }
    }
}
