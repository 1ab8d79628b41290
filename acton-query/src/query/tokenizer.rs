//! Token-level helpers shared by the directive extractors
//!
//! None of these helpers escape, trim or otherwise normalize their input.
//! A separator embedded in a logical value always splits it.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// Unicode general category L (Lu, Ll, Lt, Lm, Lo)
static LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{L}").expect("letter class is a valid regex"));

/// Literal separators of the query directive syntax
///
/// # Example
///
/// ```rust
/// use acton_query::query::Separator;
///
/// assert_eq!(Separator::Map.as_char(), ',');
/// assert_eq!(format!("{}", Separator::Value), ":");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// Separates items of an array value (`;`)
    Array,
    /// Separates directives inside one parameter (`,`)
    Map,
    /// Separates a field from its direction (`:`)
    Value,
    /// Opens an operator or index (`[`)
    OperatorStart,
    /// Closes an operator or index (`]`)
    OperatorEnd,
}

impl Separator {
    /// The literal character for this separator
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Array => ';',
            Self::Map => ',',
            Self::Value => ':',
            Self::OperatorStart => '[',
            Self::OperatorEnd => ']',
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse a non-negative integer, falling back on anything else
///
/// Empty, non-numeric and negative inputs all yield `fallback`.
///
/// # Example
///
/// ```rust
/// use acton_query::query::positive_int_or;
///
/// assert_eq!(positive_int_or("25", 10), 25);
/// assert_eq!(positive_int_or("", 10), 10);
/// assert_eq!(positive_int_or("-3", 10), 10);
/// assert_eq!(positive_int_or("ten", 10), 10);
/// ```
#[must_use]
pub fn positive_int_or(raw: &str, fallback: u64) -> u64 {
    if raw.is_empty() {
        return fallback;
    }

    match raw.parse::<i64>() {
        Ok(n) => u64::try_from(n).unwrap_or(fallback),
        Err(_) => fallback,
    }
}

/// Check whether `s` contains at least one Unicode letter
///
/// Letters are characters in general category L. Letter-like numerals such
/// as `Ⅻ` and combining marks do not count. This is the minimal sanity check
/// applied to field names. It does not validate identifiers.
///
/// # Example
///
/// ```rust
/// use acton_query::query::has_letter;
///
/// assert!(has_letter("1a1"));
/// assert!(has_letter("préço"));
/// assert!(!has_letter("42"));
/// assert!(!has_letter(" . "));
/// assert!(!has_letter("Ⅻ"));
/// ```
#[must_use]
pub fn has_letter(s: &str) -> bool {
    LETTER.is_match(s)
}

/// Split `s` on every occurrence of `separator`
///
/// An empty input yields a single empty segment.
pub fn split_on(s: &str, separator: Separator) -> impl Iterator<Item = &str> {
    s.split(separator.as_char())
}

/// Split `s` around its first `[` and first `]`
///
/// Returns `(prefix, content, rest)`, or `None` when either bracket is
/// missing or the first `]` comes before the first `[`.
pub(crate) fn split_bracketed(s: &str) -> Option<(&str, &str, &str)> {
    let start = s.find(Separator::OperatorStart.as_char())?;
    let end = s.find(Separator::OperatorEnd.as_char())?;
    if end < start {
        return None;
    }

    Some((&s[..start], &s[start + 1..end], &s[end + 1..]))
}

/// Extract `(prefix, content)` from a key shaped like `prefix[content]`
///
/// Only the first `[` and the first `]` are considered; anything after the
/// closing bracket is ignored. Returns `("", "")` when the key has no
/// bracket pair.
///
/// # Example
///
/// ```rust
/// use acton_query::query::extract_bracketed;
///
/// assert_eq!(extract_bracketed("price[gt]"), ("price", "gt"));
/// assert_eq!(extract_bracketed("sort[1]trailing]"), ("sort", "1"));
/// assert_eq!(extract_bracketed("plain"), ("", ""));
/// ```
#[must_use]
pub fn extract_bracketed(key: &str) -> (&str, &str) {
    split_bracketed(key).map_or(("", ""), |(prefix, content, _)| (prefix, content))
}
