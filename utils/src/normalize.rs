//! Text normalization.
//!
//! Two levels:
//! - [`collapse_whitespace`] is presentation-safe: it only touches
//!   whitespace and control characters, so it can run on text shown to a
//!   participant.
//! - [`fold_for_matching`] is lossy and only for comparison: compatibility
//!   normalization, lowercase, Hebrew points stripped, quote variants unified.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

/// Hebrew maqaf (hyphen that joins words).
const MAQAF: char = '\u{05BE}';
/// Hebrew geresh, used as an apostrophe.
const GERESH: char = '\u{05F3}';
/// Hebrew gershayim, used as a double quote.
const GERSHAYIM: char = '\u{05F4}';

fn is_space_like(c: char) -> bool {
    c.is_whitespace() || c.is_control()
}

/// Collapse every run of whitespace or control characters into a single
/// space and trim both ends.
///
/// Returns `Cow::Borrowed` when the input is already collapsed.
#[must_use]
pub fn collapse_whitespace(input: &str) -> Cow<'_, str> {
    if !needs_collapse(input) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    let mut pending_space = false;
    for c in input.chars() {
        if is_space_like(c) {
            pending_space = !result.is_empty();
        } else {
            if pending_space {
                result.push(' ');
                pending_space = false;
            }
            result.push(c);
        }
    }
    Cow::Owned(result)
}

fn needs_collapse(input: &str) -> bool {
    let mut previous_space = true; // leading space counts as needing work
    for c in input.chars() {
        if is_space_like(c) {
            if previous_space || c != ' ' {
                return true;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
    }
    // trailing space
    previous_space && !input.is_empty()
}

/// Whether `c` is a Hebrew vowel point or cantillation mark.
///
/// Punctuation that lives in the same block (maqaf, paseq, sof pasuq,
/// nun hafukha) is not a point.
#[must_use]
pub fn is_hebrew_point(c: char) -> bool {
    matches!(
        c,
        '\u{0591}'..='\u{05BD}'
            | '\u{05BF}'
            | '\u{05C1}'..='\u{05C2}'
            | '\u{05C4}'..='\u{05C5}'
            | '\u{05C7}'
    )
}

/// Fold text into its matching form.
///
/// - NFKC compatibility normalization (presentation forms, full-width letters)
/// - Hebrew points removed, maqaf treated as a space
/// - Curly apostrophes and geresh become `'`, curly quotes and gershayim `"`
/// - Lowercased, whitespace collapsed and trimmed
#[must_use]
pub fn fold_for_matching(input: &str) -> String {
    let folded: String = input
        .nfkc()
        .filter(|c| !is_hebrew_point(*c))
        .map(|c| match c {
            MAQAF => ' ',
            '\u{2018}' | '\u{2019}' | '\u{02BC}' | '`' | GERESH => '\'',
            '\u{201C}' | '\u{201D}' | GERSHAYIM => '"',
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect();
    collapse_whitespace(&folded).into_owned()
}
