//! Lexicon store: compiled, language-keyed trigger lists.
//!
//! Raw [`LexiconSource`] bundles are compiled into [`Lexicon`]s whose lists
//! are pre-tokenized [`PhraseSet`]s. The store always carries the built-in
//! Hebrew and English bundles; configured bundles extend a built-in language
//! or register a new one.

mod english;
mod hebrew;

use std::collections::HashMap;
use std::sync::OnceLock;

use facilitator_types::{Language, LexiconSource};

use crate::classifier::Utterance;

/// Single-letter Hebrew proclitics tolerated in front of a lexicon word.
const HEBREW_PROCLITICS: &[char] = &['ו', 'ש', 'ה', 'ב', 'ל', 'כ', 'מ'];

/// A list of phrases, each stored as word tokens, longest first.
#[derive(Debug, Clone, Default)]
pub struct PhraseSet {
    phrases: Vec<Vec<String>>,
    proclitics: bool,
}

impl PhraseSet {
    fn compile(entries: &[String], proclitics: bool) -> Self {
        let mut phrases: Vec<Vec<String>> = entries
            .iter()
            .map(|entry| Utterance::parse(entry).into_tokens())
            .filter(|tokens| !tokens.is_empty())
            .collect();
        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        phrases.dedup();
        Self {
            phrases,
            proclitics,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Token lengths of every phrase matching at `at`, longest first.
    pub fn matches_at<'a>(
        &'a self,
        tokens: &'a [String],
        at: usize,
    ) -> impl Iterator<Item = usize> + 'a {
        let rest = tokens.get(at..).unwrap_or_default();
        self.phrases
            .iter()
            .filter(move |phrase| {
                phrase.len() <= rest.len()
                    && phrase.iter().zip(rest).enumerate().all(|(i, (entry, word))| {
                        word_matches(word, entry, self.proclitics && i == 0)
                    })
            })
            .map(Vec::len)
    }

    /// Token length of the longest phrase matching at `at`.
    #[must_use]
    pub fn match_at(&self, tokens: &[String], at: usize) -> Option<usize> {
        self.matches_at(tokens, at).next()
    }

    /// Longest span matching at `at` when tokens flagged in `gaps` may sit
    /// between the words of a phrase ("not really sure" for "not sure").
    /// The first word must match at `at` itself.
    #[must_use]
    pub fn match_at_with_gaps(&self, tokens: &[String], at: usize, gaps: &[bool]) -> Option<usize> {
        self.phrases
            .iter()
            .filter_map(|phrase| {
                let mut pos = at;
                for (i, entry) in phrase.iter().enumerate() {
                    let allow_proclitic = self.proclitics && i == 0;
                    if i > 0 {
                        while pos < tokens.len()
                            && gaps.get(pos).copied().unwrap_or(false)
                            && !word_matches(&tokens[pos], entry, allow_proclitic)
                        {
                            pos += 1;
                        }
                    }
                    if !tokens
                        .get(pos)
                        .is_some_and(|word| word_matches(word, entry, allow_proclitic))
                    {
                        return None;
                    }
                    pos += 1;
                }
                Some(pos - at)
            })
            .max()
    }

    /// Whether `tokens[start..end]` is exactly one phrase of this set.
    #[must_use]
    pub fn matches_span(&self, tokens: &[String], start: usize, end: usize) -> bool {
        end > start
            && end <= tokens.len()
            && self.matches_at(&tokens[..end], start).any(|len| len == end - start)
    }

    /// Whether `word` on its own is an entry of this set.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.phrases
            .iter()
            .any(|phrase| phrase.len() == 1 && word_matches(word, &phrase[0], self.proclitics))
    }
}

fn word_matches(word: &str, entry: &str, allow_proclitic: bool) -> bool {
    if word == entry {
        return true;
    }
    if !allow_proclitic || entry.chars().count() < 2 {
        return false;
    }
    let mut chars = word.chars();
    chars
        .next()
        .is_some_and(|first| HEBREW_PROCLITICS.contains(&first) && chars.as_str() == entry)
}

/// Selects one trigger list of a [`Lexicon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    SkipDirectives,
    RequestFrames,
    CourtesyWords,
    SkipTargets,
    ClarificationRequests,
    Uncertainty,
    Hedges,
    Fillers,
    Connectors,
    Interrogatives,
    TaskReferences,
    FunctionWords,
    TaskHelp,
    Completion,
    Checkin,
}

/// A compiled bundle for one language.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub language: Language,
    pub skip_directives: PhraseSet,
    pub request_frames: PhraseSet,
    pub courtesy_words: PhraseSet,
    pub skip_targets: PhraseSet,
    pub clarification_requests: PhraseSet,
    pub uncertainty: PhraseSet,
    pub hedges: PhraseSet,
    pub fillers: PhraseSet,
    pub connectors: PhraseSet,
    pub interrogatives: PhraseSet,
    pub task_references: PhraseSet,
    pub function_words: PhraseSet,
    pub task_help: PhraseSet,
    pub completion: PhraseSet,
    pub checkin: PhraseSet,
    pub banned_phrases: Vec<String>,
}

impl Lexicon {
    #[must_use]
    pub fn compile(source: &LexiconSource) -> Self {
        let proclitics = source.language.is_hebrew();
        let set = |entries: &[String]| PhraseSet::compile(entries, proclitics);
        Self {
            language: source.language.clone(),
            skip_directives: set(&source.skip_directives),
            request_frames: set(&source.request_frames),
            courtesy_words: set(&source.courtesy_words),
            skip_targets: set(&source.skip_targets),
            clarification_requests: set(&source.clarification_requests),
            uncertainty: set(&source.uncertainty),
            hedges: set(&source.hedges),
            fillers: set(&source.fillers),
            connectors: set(&source.connectors),
            interrogatives: set(&source.interrogatives),
            task_references: set(&source.task_references),
            function_words: set(&source.function_words),
            task_help: set(&source.task_help),
            completion: set(&source.completion),
            checkin: set(&source.checkin),
            banned_phrases: source.banned_phrases.clone(),
        }
    }

    #[must_use]
    pub fn list(&self, kind: ListKind) -> &PhraseSet {
        match kind {
            ListKind::SkipDirectives => &self.skip_directives,
            ListKind::RequestFrames => &self.request_frames,
            ListKind::CourtesyWords => &self.courtesy_words,
            ListKind::SkipTargets => &self.skip_targets,
            ListKind::ClarificationRequests => &self.clarification_requests,
            ListKind::Uncertainty => &self.uncertainty,
            ListKind::Hedges => &self.hedges,
            ListKind::Fillers => &self.fillers,
            ListKind::Connectors => &self.connectors,
            ListKind::Interrogatives => &self.interrogatives,
            ListKind::TaskReferences => &self.task_references,
            ListKind::FunctionWords => &self.function_words,
            ListKind::TaskHelp => &self.task_help,
            ListKind::Completion => &self.completion,
            ListKind::Checkin => &self.checkin,
        }
    }
}

/// Built-in bundles in registration order.
#[must_use]
pub fn builtin_sources() -> Vec<LexiconSource> {
    vec![english::source(), hebrew::source()]
}

/// Language-keyed lexicon capability.
#[derive(Debug, Clone)]
pub struct LexiconStore {
    bundles: HashMap<Language, Lexicon>,
}

impl Default for LexiconStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LexiconStore {
    /// Store holding only the built-in Hebrew and English bundles.
    #[must_use]
    pub fn builtin() -> Self {
        Self::with_extensions(&[])
    }

    /// Built-in bundles extended with `extra`. An extra bundle for a
    /// built-in language appends to it; any other language is registered as
    /// a new bundle.
    #[must_use]
    pub fn with_extensions(extra: &[LexiconSource]) -> Self {
        let mut sources: Vec<LexiconSource> = builtin_sources();
        for bundle in extra {
            match sources.iter_mut().find(|s| s.language == bundle.language) {
                Some(existing) => existing.extend(bundle),
                None => sources.push(bundle.clone()),
            }
        }

        let bundles: HashMap<Language, Lexicon> = sources
            .iter()
            .map(|source| (source.language.clone(), Lexicon::compile(source)))
            .collect();
        tracing::debug!(languages = bundles.len(), "Lexicon store compiled");
        Self { bundles }
    }

    #[must_use]
    pub fn get(&self, language: &Language) -> Option<&Lexicon> {
        self.bundles.get(language)
    }

    /// Bundle for `language`, falling back to English when none is registered.
    #[must_use]
    pub fn for_language(&self, language: &Language) -> &Lexicon {
        if let Some(lexicon) = self.bundles.get(language) {
            return lexicon;
        }
        tracing::debug!(language = language.as_str(), "No lexicon bundle; using English");
        &self.bundles[&Language::ENGLISH]
    }

    /// Base banned phrases for replies in `language`: the English list, then
    /// the language's own list when it has one.
    #[must_use]
    pub fn banned_phrases_for(&self, language: &Language) -> Vec<&str> {
        let mut phrases: Vec<&str> = Vec::new();
        for tag in [&Language::ENGLISH, language] {
            if let Some(lexicon) = self.bundles.get(tag) {
                for phrase in &lexicon.banned_phrases {
                    if !phrases.contains(&phrase.as_str()) {
                        phrases.push(phrase);
                    }
                }
            }
        }
        phrases
    }

    /// Registered language tags, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&Language> {
        let mut languages: Vec<&Language> = self.bundles.keys().collect();
        languages.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        languages
    }
}

/// Shared store with only the built-in bundles.
pub(crate) fn builtin_store() -> &'static LexiconStore {
    static STORE: OnceLock<LexiconStore> = OnceLock::new();
    STORE.get_or_init(LexiconStore::builtin)
}
