//! Small pure text helpers.

use unicode_segmentation::UnicodeSegmentation;

/// User-perceived length: grapheme clusters, so Hebrew with niqqud or emoji
/// sequences count once.
#[must_use]
pub fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Truncate a string to fit within `max_total` graphemes, appending `suffix` if truncated.
///
/// The suffix counts toward the budget: the returned string is at most `max_total` graphemes.
#[must_use]
pub fn truncate_to_fit(raw: &str, max_total: usize, suffix: &str) -> String {
    if grapheme_len(raw) <= max_total {
        return raw.to_string();
    }
    let take = max_total.saturating_sub(grapheme_len(suffix));
    let head: String = raw.graphemes(true).take(take).collect();
    format!("{}{suffix}", head.trim_end())
}

/// Truncate a string to a maximum length, adding `...` if needed.
///
/// - Trims surrounding whitespace before truncating.
/// - Counts graphemes, never splitting a combined character.
/// - Enforces a minimum `max` of 3 so the ellipsis fits.
#[must_use]
pub fn truncate_with_ellipsis(raw: &str, max: usize) -> String {
    let max = max.max(3);
    truncate_to_fit(raw.trim(), max, "...")
}
