//! Post-processing of model-generated replies.
//!
//! Each pass:
//! 1. Control characters become whitespace; whitespace collapses.
//! 2. Banned phrases are removed (case-insensitive, word-bounded).
//! 3. Outside `CLARIFY`/`TASK_SUPPORT`, every `?` after the first becomes `.`.
//! 4. Punctuation orphaned by removals is tidied.
//!
//! Passes repeat until the text stops changing, so validating validated text
//! is a no-op.

use std::fmt;
use std::sync::OnceLock;

use facilitator_types::{ConversationState, DayPlan};
use facilitator_utils::{PhraseScrubber, collapse_whitespace};
use regex::Regex;

use crate::lexicon::{LexiconStore, builtin_store};

struct Tidy {
    empty_sentence: Regex,
    space_before: Regex,
    soft_before_terminal: Regex,
    doubled_soft: Regex,
    after_terminal: Regex,
    leading: Regex,
}

fn tidy_rules() -> &'static Tidy {
    static TIDY: OnceLock<Tidy> = OnceLock::new();
    TIDY.get_or_init(|| Tidy {
        empty_sentence: Regex::new(r"([.!?])(\s+[.!])+").expect("static regex"),
        space_before: Regex::new(r"\s+([,.;:!?])").expect("static regex"),
        soft_before_terminal: Regex::new(r"[,;:]\s*([.!?])").expect("static regex"),
        doubled_soft: Regex::new(r",(\s*,)+").expect("static regex"),
        after_terminal: Regex::new(r"([?!])\.+").expect("static regex"),
        leading: Regex::new(r"^[,.;:!]+\s*").expect("static regex"),
    })
}

/// Validator for one day's policy: base lists plus plan and configured
/// extras.
pub struct MessageValidator {
    scrubber: PhraseScrubber,
}

impl fmt::Debug for MessageValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageValidator")
            .field("scrubber", &self.scrubber)
            .finish()
    }
}

impl MessageValidator {
    #[must_use]
    pub fn new<I, S>(banned_phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            scrubber: PhraseScrubber::new(banned_phrases),
        }
    }

    /// Policy for `plan`: the English base list, the plan language's list,
    /// the plan's own forbidden phrases and `extra`.
    #[must_use]
    pub fn for_plan(plan: &DayPlan, store: &LexiconStore, extra: &[String]) -> Self {
        let mut phrases = store.banned_phrases_for(&plan.language);
        phrases.extend(plan.forbidden_phrases.iter().map(String::as_str));
        phrases.extend(extra.iter().map(String::as_str));
        Self::new(phrases)
    }

    #[must_use]
    pub fn scrubber(&self) -> &PhraseScrubber {
        &self.scrubber
    }

    /// Repeats [`pass`](Self::pass) until the text is stable, so nested
    /// phrases ("deep deep dive dive") are peeled completely. Every pass that
    /// changes the text removes non-space characters or shortens it, except
    /// the one-time `?` conversion.
    #[must_use]
    pub fn validate(&self, text: &str, state: ConversationState) -> String {
        let mut current = collapse_whitespace(text).into_owned();
        loop {
            let next = self.pass(&current, state);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn pass(&self, text: &str, state: ConversationState) -> String {
        let (scrubbed, removed) = self.scrubber.scrub_counted(text);
        let mut out = collapse_whitespace(&scrubbed).into_owned();

        let mut converted = 0;
        if !state.is_support_loop() {
            (out, converted) = single_question(&out);
        }

        let out = collapse_whitespace(&tidy_punctuation(&out)).into_owned();
        if removed > 0 || converted > 0 {
            tracing::debug!(%state, removed, converted, "Validated reply");
        }
        out
    }
}

/// Keep the first `?`; later ones become `.`.
fn single_question(text: &str) -> (String, usize) {
    let mut seen = false;
    let mut converted = 0;
    let out = text
        .chars()
        .map(|c| match c {
            '?' if seen => {
                converted += 1;
                '.'
            }
            '?' => {
                seen = true;
                c
            }
            other => other,
        })
        .collect();
    (out, converted)
}

fn tidy_punctuation(text: &str) -> String {
    let rules = tidy_rules();
    let text = rules.empty_sentence.replace_all(text, "$1");
    let text = rules.space_before.replace_all(&text, "$1");
    let text = rules.doubled_soft.replace_all(&text, ",");
    let text = rules.soft_before_terminal.replace_all(&text, "$1");
    let text = rules.after_terminal.replace_all(&text, "$1");
    rules.leading.replace(&text, "").into_owned()
}

fn default_validator() -> &'static MessageValidator {
    static VALIDATOR: OnceLock<MessageValidator> = OnceLock::new();
    VALIDATOR.get_or_init(|| {
        let store = builtin_store();
        let phrases: Vec<String> = store
            .languages()
            .into_iter()
            .filter_map(|language| store.get(language))
            .flat_map(|lexicon| lexicon.banned_phrases.iter().cloned())
            .collect();
        MessageValidator::new(phrases)
    })
}

/// Validate with the built-in Hebrew and English base lists.
#[must_use]
pub fn validate(text: &str, state: ConversationState) -> String {
    default_validator().validate(text, state)
}
