//! Intent classification for participant messages.
//!
//! [`IntentClassifier`] is an ordered list of [`IntentMatcher`]s over a
//! tokenized [`Utterance`]. The first matcher to fire decides the intent;
//! when none does, a state-sensitive default applies. Classification is
//! total: every message in every state yields an [`Intent`].

mod matchers;
mod utterance;

use std::fmt;
use std::sync::OnceLock;

use facilitator_types::{ClassifierThresholds, ConversationState, Intent, Language, infer_language};

pub use matchers::{
    BareInterrogative, Checkin, ClarificationRequest, CompletionAnnouncement, HedgedAnswer,
    IntentMatcher, MatchContext, NegatedClarity, PureUncertainty, SkipDirective, TaskHelpRequest,
    default_matchers, state_default,
};
pub use utterance::Utterance;

use crate::lexicon::{Lexicon, LexiconStore};

pub struct IntentClassifier {
    store: LexiconStore,
    thresholds: ClassifierThresholds,
    matchers: Vec<Box<dyn IntentMatcher>>,
}

impl fmt::Debug for IntentClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.matchers.iter().map(|m| m.name()).collect();
        f.debug_struct("IntentClassifier")
            .field("thresholds", &self.thresholds)
            .field("matchers", &names)
            .finish_non_exhaustive()
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(LexiconStore::builtin(), ClassifierThresholds::default())
    }
}

impl IntentClassifier {
    #[must_use]
    pub fn new(store: LexiconStore, thresholds: ClassifierThresholds) -> Self {
        let mut matchers = default_matchers();
        matchers.sort_by_key(|m| m.priority());
        Self {
            store,
            thresholds,
            matchers,
        }
    }

    /// Add a matcher; it runs in priority order among the built-in ones.
    pub fn with_matcher(mut self, matcher: Box<dyn IntentMatcher>) -> Self {
        self.matchers.push(matcher);
        self.matchers.sort_by_key(|m| m.priority());
        self
    }

    #[must_use]
    pub fn store(&self) -> &LexiconStore {
        &self.store
    }

    #[must_use]
    pub fn thresholds(&self) -> ClassifierThresholds {
        self.thresholds
    }

    /// Classify `message` received in `state` of a journey in `language`.
    ///
    /// The bundle for `language` is consulted together with the bundle of
    /// the message's own script, so a Hebrew reply in an English journey is
    /// still understood.
    #[must_use]
    pub fn classify(&self, message: &str, state: ConversationState, language: &Language) -> Intent {
        let utterance = Utterance::parse(message);
        let ctx = MatchContext::new(state, self.thresholds, self.lexicons_for(message, language));

        for matcher in &self.matchers {
            if let Some(intent) = matcher.applies(&utterance, &ctx) {
                tracing::debug!(
                    matcher = matcher.name(),
                    %intent,
                    %state,
                    chars = utterance.len_graphemes(),
                    "Classified message"
                );
                return intent;
            }
        }

        let intent = state_default(&utterance, &ctx);
        tracing::debug!(
            matcher = "state_default",
            %intent,
            %state,
            chars = utterance.len_graphemes(),
            "Classified message"
        );
        intent
    }

    fn lexicons_for(&self, message: &str, language: &Language) -> Vec<&Lexicon> {
        let primary = self.store.for_language(language);
        let mut lexicons = vec![primary];
        if let Some(inferred) = infer_language(message)
            && let Some(lexicon) = self.store.get(&inferred)
            && lexicon.language != primary.language
        {
            lexicons.push(lexicon);
        }
        lexicons
    }
}

fn default_classifier() -> &'static IntentClassifier {
    static CLASSIFIER: OnceLock<IntentClassifier> = OnceLock::new();
    CLASSIFIER.get_or_init(IntentClassifier::default)
}

/// Classify with the built-in lexicons and default thresholds. The message's
/// script selects the bundle.
#[must_use]
pub fn classify(message: &str, state: ConversationState) -> Intent {
    default_classifier().classify(message, state, &Language::ENGLISH)
}

/// [`classify`] for a journey in `language`.
#[must_use]
pub fn classify_in(message: &str, state: ConversationState, language: &Language) -> Intent {
    default_classifier().classify(message, state, language)
}
