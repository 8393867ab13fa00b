//! Text normalization for name and continent comparisons.
//!
//! Every equality or substring comparison on record text goes through
//! [`normalize`], so `"México"`, `"MEXICO"` and `"  méxico "` all
//! compare equal.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes a string for comparison.
///
/// Applies Unicode canonical decomposition (NFD), drops combining
/// marks, lower-cases the remaining characters and trims surrounding
/// whitespace. Pure and total: any input yields a (possibly empty)
/// canonical form.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns true if `text` has no content once normalized.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    normalize(text).is_empty()
}
