//! Raw lexicon bundles: language-tagged trigger lists.
//!
//! A bundle is plain data. The built-in Hebrew and English bundles live in
//! `facilitator-core`; configuration can extend them or register bundles for
//! new languages. Phrases are matched word-by-word after normalization, so
//! entries are written in lowercase with single spaces.

use serde::{Deserialize, Serialize};

use crate::Language;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconSource {
    pub language: Language,
    /// Bare directives that ask to bypass the current question or task.
    pub skip_directives: Vec<String>,
    /// Openers that frame a directive as a request ("can we", "let's").
    pub request_frames: Vec<String>,
    /// Trailing courtesy that leaves a directive standalone ("please", "now").
    pub courtesy_words: Vec<String>,
    /// Conversational objects a skip directive may take ("this question").
    pub skip_targets: Vec<String>,
    /// Explicit asks to repeat, rephrase, or explain.
    pub clarification_requests: Vec<String>,
    /// Phrases expressing uncertainty or negated clarity.
    pub uncertainty: Vec<String>,
    /// Hedge words that may trail an uncertainty phrase ("yet", "really").
    pub hedges: Vec<String>,
    /// Discourse fillers and subject pronouns that carry no content.
    pub fillers: Vec<String>,
    /// Conjunctions that introduce content after a hedge ("maybe", "but").
    pub connectors: Vec<String>,
    /// Question words.
    pub interrogatives: Vec<String>,
    /// Phrases that refer to the task or to what to do.
    pub task_references: Vec<String>,
    /// Function words that never count as substantive content.
    pub function_words: Vec<String>,
    /// Help-seeking phrases during the task.
    pub task_help: Vec<String>,
    /// Phrases announcing the task is done.
    pub completion: Vec<String>,
    /// Greetings and readiness phrases.
    pub checkin: Vec<String>,
    /// Stylistic phrases generated replies must never contain.
    pub banned_phrases: Vec<String>,
}

impl LexiconSource {
    #[must_use]
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Every entry of every list, for in-place rewriting.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut String> {
        [
            &mut self.skip_directives,
            &mut self.request_frames,
            &mut self.courtesy_words,
            &mut self.skip_targets,
            &mut self.clarification_requests,
            &mut self.uncertainty,
            &mut self.hedges,
            &mut self.fillers,
            &mut self.connectors,
            &mut self.interrogatives,
            &mut self.task_references,
            &mut self.function_words,
            &mut self.task_help,
            &mut self.completion,
            &mut self.checkin,
            &mut self.banned_phrases,
        ]
        .into_iter()
        .flatten()
    }

    /// Append every list of `other` onto this bundle, skipping duplicates.
    pub fn extend(&mut self, other: &LexiconSource) {
        let pairs: [(&mut Vec<String>, &Vec<String>); 16] = [
            (&mut self.skip_directives, &other.skip_directives),
            (&mut self.request_frames, &other.request_frames),
            (&mut self.courtesy_words, &other.courtesy_words),
            (&mut self.skip_targets, &other.skip_targets),
            (
                &mut self.clarification_requests,
                &other.clarification_requests,
            ),
            (&mut self.uncertainty, &other.uncertainty),
            (&mut self.hedges, &other.hedges),
            (&mut self.fillers, &other.fillers),
            (&mut self.connectors, &other.connectors),
            (&mut self.interrogatives, &other.interrogatives),
            (&mut self.task_references, &other.task_references),
            (&mut self.function_words, &other.function_words),
            (&mut self.task_help, &other.task_help),
            (&mut self.completion, &other.completion),
            (&mut self.checkin, &other.checkin),
            (&mut self.banned_phrases, &other.banned_phrases),
        ];
        for (target, extra) in pairs {
            for entry in extra {
                if !target.contains(entry) {
                    target.push(entry.clone());
                }
            }
        }
    }
}

/// Convert a static word list into owned entries.
#[must_use]
pub fn owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
