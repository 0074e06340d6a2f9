//! Banned-phrase removal for generated replies.
//!
//! [`PhraseScrubber`] compiles a phrase list into a single Aho-Corasick
//! automaton (ASCII case-insensitive, leftmost-longest) and removes every
//! occurrence that sits on word boundaries. Entries prefixed with `re:` are
//! compiled as case-insensitive regular expressions instead; they apply
//! after the literal pass and carry their own boundaries.

use std::borrow::Cow;
use std::fmt;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use regex::{Regex, RegexBuilder};

use crate::normalize::collapse_whitespace;

/// Prefix marking a phrase list entry as a regular expression.
pub const REGEX_PREFIX: &str = "re:";

/// Word-bounded, case-insensitive phrase remover.
///
/// Removed spans are replaced by a single space; callers tidy the
/// surrounding whitespace and punctuation afterwards.
pub struct PhraseScrubber {
    phrases: Vec<String>,
    patterns: Vec<Regex>,
    automaton: Option<AhoCorasick>,
}

impl fmt::Debug for PhraseScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhraseScrubber")
            .field("phrase_count", &self.phrases.len())
            .field("pattern_count", &self.patterns.len())
            .finish_non_exhaustive()
    }
}

impl PhraseScrubber {
    /// Compile a phrase list. Blank entries are ignored, duplicates are
    /// folded, and `re:` entries that are invalid or can match the empty
    /// string are logged and skipped.
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phrases: Vec<String> = Vec::new();
        let mut patterns: Vec<Regex> = Vec::new();

        for entry in entries {
            let entry = entry.as_ref().trim();
            if let Some(source) = entry.strip_prefix(REGEX_PREFIX) {
                match RegexBuilder::new(source.trim())
                    .case_insensitive(true)
                    .build()
                {
                    Ok(re) if re.is_match("") => {
                        tracing::warn!(
                            pattern = source,
                            "Skipping banned pattern that matches empty text"
                        );
                    }
                    Ok(re) => patterns.push(re),
                    Err(e) => tracing::warn!(pattern = source, "Skipping invalid banned pattern ({e})"),
                }
                continue;
            }
            let phrase = collapse_whitespace(entry).to_ascii_lowercase();
            if !phrase.is_empty() {
                phrases.push(phrase);
            }
        }

        // Longest first keeps the fallback path consistent with leftmost-longest.
        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        phrases.dedup();

        let phrase_count = phrases.len();
        let automaton = if phrases.is_empty() {
            None
        } else {
            match AhoCorasickBuilder::new()
                .match_kind(MatchKind::LeftmostLongest)
                .ascii_case_insensitive(true)
                .build(&phrases)
            {
                Ok(ac) => Some(ac),
                Err(e) => {
                    tracing::warn!(
                        phrase_count,
                        "PhraseScrubber automaton build failed; using sequential scan ({e})"
                    );
                    None
                }
            }
        };

        Self {
            phrases,
            patterns,
            automaton,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty() && self.patterns.is_empty()
    }

    /// Number of literal phrases plus regex patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len() + self.patterns.len()
    }

    /// Whether `text` still contains any banned phrase or pattern.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        !self.literal_spans(text).is_empty() || self.patterns.iter().any(|re| re.is_match(text))
    }

    /// Remove every banned occurrence from `input`.
    #[must_use]
    pub fn scrub<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.scrub_counted(input).0
    }

    /// Remove every banned occurrence and report how many spans were removed.
    #[must_use]
    pub fn scrub_counted<'a>(&self, input: &'a str) -> (Cow<'a, str>, usize) {
        if self.is_empty() {
            return (Cow::Borrowed(input), 0);
        }

        let spans = self.literal_spans(input);
        let mut removed = spans.len();
        let mut output: Cow<'a, str> = if spans.is_empty() {
            Cow::Borrowed(input)
        } else {
            let mut result = String::with_capacity(input.len());
            let mut last = 0;
            for (start, end) in spans {
                result.push_str(&input[last..start]);
                result.push(' ');
                last = end;
            }
            result.push_str(&input[last..]);
            Cow::Owned(result)
        };

        for re in &self.patterns {
            let hits = re.find_iter(&output).count();
            if hits > 0 {
                removed += hits;
                output = Cow::Owned(re.replace_all(&output, " ").into_owned());
            }
        }

        if removed > 0 {
            tracing::debug!(removed, "Scrubbed banned phrases");
        }
        (output, removed)
    }

    /// Byte spans of word-bounded literal matches, in order, non-overlapping.
    fn literal_spans(&self, input: &str) -> Vec<(usize, usize)> {
        if let Some(ac) = &self.automaton {
            return ac
                .find_iter(input)
                .map(|m| (m.start(), m.end()))
                .filter(|&(start, end)| on_word_boundaries(input, start, end))
                .collect();
        }

        // Sequential scan. ASCII lowercasing preserves byte offsets.
        let haystack = input.to_ascii_lowercase();
        let mut taken: Vec<(usize, usize)> = Vec::new();
        for phrase in &self.phrases {
            for (start, _) in haystack.match_indices(phrase.as_str()) {
                let end = start + phrase.len();
                let overlaps = taken.iter().any(|&(s, e)| start < e && s < end);
                if !overlaps && on_word_boundaries(input, start, end) {
                    taken.push((start, end));
                }
            }
        }
        taken.sort_unstable();
        taken
    }
}

/// A match is bounded when the text on each side of it does not continue a
/// word the match itself starts or ends with.
fn on_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];
    let first_is_word = matched.chars().next().is_some_and(char::is_alphanumeric);
    let last_is_word = matched.chars().next_back().is_some_and(char::is_alphanumeric);

    let before_ok = !first_is_word
        || text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
    let after_ok = !last_is_word
        || text[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::PhraseScrubber;

    #[test]
    fn removes_phrases_case_insensitively() {
        let scrubber = PhraseScrubber::new(["great question", "as an ai"]);
        let (out, removed) = scrubber.scrub_counted("Great question! As an AI I think so.");
        assert_eq!(removed, 2);
        assert!(!scrubber.contains(&out));
        assert!(out.contains("I think so."));
    }

    #[test]
    fn respects_word_boundaries() {
        let scrubber = PhraseScrubber::new(["as an ai"]);
        let input = "She has an aim.";
        assert_eq!(scrubber.scrub(input), input);
        assert!(!scrubber.contains(input));
    }

    #[test]
    fn prefers_longest_match() {
        let scrubber = PhraseScrubber::new(["journey", "on this journey"]);
        let out = scrubber.scrub("We are on this journey together");
        assert_eq!(out, "We are   together");
    }

    #[test]
    fn regex_entries_apply() {
        let scrubber = PhraseScrubber::new([r"re:\bi (totally|completely) understand\b"]);
        let out = scrubber.scrub("I totally understand. Keep going.");
        assert_eq!(out.trim(), ". Keep going.");
    }

    #[test]
    fn invalid_regex_is_skipped() {
        let scrubber = PhraseScrubber::new(["re:(unclosed", "  "]);
        assert!(scrubber.is_empty());
        assert_eq!(scrubber.len(), 0);
    }

    #[test]
    fn hebrew_phrases_match() {
        let scrubber = PhraseScrubber::new(["שאלה מצוינת"]);
        let out = scrubber.scrub("שאלה מצוינת, בוא נמשיך");
        assert_eq!(out, " , בוא נמשיך");
    }

    #[test]
    fn patterns_matching_empty_text_are_skipped() {
        let scrubber = PhraseScrubber::new(["re:x*", "re:"]);
        assert!(scrubber.is_empty());
        assert_eq!(scrubber.scrub("xx marks"), "xx marks");
    }

    #[test]
    fn untouched_input_is_borrowed() {
        let scrubber = PhraseScrubber::new(["deep dive"]);
        assert!(matches!(
            scrubber.scrub("plain text"),
            Cow::Borrowed(_)
        ));
    }
}
