//! Tokenized participant message.

use std::mem;

use facilitator_types::grapheme_len;
use facilitator_utils::fold_for_matching;

/// Punctuation that ends a clause. A hyphen counts only when it is not
/// joining two word characters.
const CLAUSE_BREAKS: &[char] = &[',', '.', ';', ':', '!', '?', '…', '–', '—', '؟', '،'];

/// A message folded for matching and split into word tokens, with the clause
/// structure the matchers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    tokens: Vec<String>,
    /// `breaks[i]` is true when a clause break follows `tokens[i]`.
    breaks: Vec<bool>,
    question: bool,
    graphemes: usize,
}

impl Utterance {
    #[must_use]
    pub fn parse(message: &str) -> Self {
        let folded = fold_for_matching(message);
        let chars: Vec<char> = folded.chars().collect();

        let mut tokens: Vec<String> = Vec::new();
        let mut breaks: Vec<bool> = Vec::new();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            let prev_is_word = i > 0 && chars[i - 1].is_alphanumeric();
            let next_is_word = chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());

            if c.is_alphanumeric() {
                current.push(c);
                continue;
            }
            // Apostrophes and Hebrew acronym quotes inside a word: don't, צה"ל
            if matches!(c, '\'' | '"') && prev_is_word && next_is_word {
                current.push(c);
                continue;
            }

            if !current.is_empty() {
                tokens.push(mem::take(&mut current));
                breaks.push(false);
            }
            let is_break = CLAUSE_BREAKS.contains(&c) || (c == '-' && !(prev_is_word && next_is_word));
            if is_break && let Some(last) = breaks.last_mut() {
                *last = true;
            }
        }
        if !current.is_empty() {
            tokens.push(current);
            breaks.push(false);
        }

        Self {
            tokens,
            breaks,
            question: folded.ends_with('?') || folded.ends_with('؟'),
            graphemes: grapheme_len(message.trim()),
        }
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the message ends with a question mark.
    #[must_use]
    pub fn is_question(&self) -> bool {
        self.question
    }

    /// Length of the trimmed original message in graphemes.
    #[must_use]
    pub fn len_graphemes(&self) -> usize {
        self.graphemes
    }

    /// Whether a clause break follows the token at `index`.
    #[must_use]
    pub fn break_after(&self, index: usize) -> bool {
        self.breaks.get(index).copied().unwrap_or(false)
    }

    /// Tokens up to and including the first clause break.
    #[must_use]
    pub fn first_clause(&self) -> &[String] {
        let end = self
            .breaks
            .iter()
            .position(|&b| b)
            .map_or(self.tokens.len(), |i| i + 1);
        &self.tokens[..end]
    }
}
