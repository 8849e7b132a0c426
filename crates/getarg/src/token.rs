//! Splitting one argv entry into a canonical flag name and an optional value.
//!
//! Accepted grammar:
//!
//! ```text
//! ("-" | "--") <name> ["=" <value>]
//! ```
//!
//! Anything that does not start with `-` (and the lone `-`) is a positional
//! argument and is handed back untouched.

use thiserror::Error;

/// A token that starts with `-` but is not a well-formed flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Nothing between the dash prefix and the end of the token (or `=`).
    #[error("flag `{token}` has an empty name")]
    EmptyName { token: String },

    /// Three or more leading dashes.
    #[error("flag `{token}` has {dashes} leading dashes (expected 1 or 2)")]
    DashCount { token: String, dashes: usize },
}

/// One parsed flag token.
///
/// `-foo`, `-foo=` and `-foo=bar` all produce different values here; only the
/// last two set `has_explicit_value`. The store keeps only `name` and `value`,
/// so a bare flag and `-foo=` both read back as `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArgument {
    pub name: String,
    pub has_explicit_value: bool,
    pub value: String,
}

impl RawArgument {
    /// A bare flag (`-name`).
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_explicit_value: false,
            value: String::new(),
        }
    }

    /// A flag with an explicit value (`-name=value`), possibly empty.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_explicit_value: true,
            value: value.into(),
        }
    }
}

/// Result of classifying one argv entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Flag(RawArgument),
    Positional(&'a str),
}

/// Classify and split a single argv entry.
pub fn tokenize(arg: &str) -> Result<Token<'_>, TokenError> {
    if arg == "-" || !arg.starts_with('-') {
        return Ok(Token::Positional(arg));
    }

    let body = arg.trim_start_matches('-');
    let dashes = arg.len() - body.len();
    if dashes > 2 {
        return Err(TokenError::DashCount {
            token: arg.to_string(),
            dashes,
        });
    }

    // Split once: everything after the first `=` belongs to the value.
    let raw = match body.split_once('=') {
        Some((name, value)) => RawArgument::with_value(name, value),
        None => RawArgument::bare(body),
    };
    if raw.name.is_empty() {
        return Err(TokenError::EmptyName {
            token: arg.to_string(),
        });
    }

    Ok(Token::Flag(raw))
}

/// Strip every leading `-` from a name given at query time.
///
/// Stored names never start with a dash, so callers may use any spelling when
/// looking a flag up. Unlike [`tokenize`], three or more dashes are not an
/// error here.
pub fn canonical_name(name: &str) -> &str {
    name.trim_start_matches('-')
}
