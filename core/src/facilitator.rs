//! Per-turn orchestration: classify, transition, render prompts, and
//! validate the model's reply.
//!
//! [`Facilitator`] holds only configuration. Conversation state, guard
//! counters, and history belong to the caller and travel through
//! [`TurnInput`] / [`TurnPlan`].

use facilitator_types::{
    ConversationState, DayPlan, FacilitatorSettings, GuardCounters, Intent, Language, StepRecord,
};

use crate::classifier::IntentClassifier;
use crate::day_plan::resolve_day_plan;
use crate::lexicon::LexiconStore;
use crate::prompt::{build_state_prompt, render_system_prompt};
use crate::transition::TransitionEngine;
use crate::validator::MessageValidator;

/// One incoming participant message and the session it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct TurnInput<'a> {
    pub message: &'a str,
    pub state: ConversationState,
    pub counters: GuardCounters,
    pub plan: &'a DayPlan,
    pub journey_name: &'a str,
}

/// Everything the caller needs to call the model and persist the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnPlan {
    pub intent: Intent,
    pub previous_state: ConversationState,
    pub next_state: ConversationState,
    /// Counters to persist; already bumped if `next_state` is a side-loop.
    pub counters: GuardCounters,
    pub system_prompt: String,
    pub state_prompt: String,
}

#[derive(Debug, Default)]
pub struct Facilitator {
    classifier: IntentClassifier,
    engine: TransitionEngine,
    extra_banned_phrases: Vec<String>,
}

impl Facilitator {
    #[must_use]
    pub fn new(settings: &FacilitatorSettings) -> Self {
        let store = LexiconStore::with_extensions(&settings.lexicons);
        tracing::debug!(
            languages = store.languages().len(),
            extra_banned = settings.extra_banned_phrases.len(),
            "Facilitator configured"
        );
        Self {
            classifier: IntentClassifier::new(store, settings.thresholds),
            engine: TransitionEngine::new(settings.guards),
            extra_banned_phrases: settings.extra_banned_phrases.clone(),
        }
    }

    #[must_use]
    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    #[must_use]
    pub fn engine(&self) -> TransitionEngine {
        self.engine
    }

    #[must_use]
    pub fn resolve_plan(&self, step: &StepRecord, journey_language: &Language) -> DayPlan {
        resolve_day_plan(step, journey_language)
    }

    #[must_use]
    pub fn classify(&self, message: &str, state: ConversationState, plan: &DayPlan) -> Intent {
        self.classifier.classify(message, state, &plan.language)
    }

    /// System prompt listing the base, plan, and configured banned phrases.
    #[must_use]
    pub fn system_prompt(&self, plan: &DayPlan, journey_name: &str) -> String {
        let mut never_say = self.classifier.store().banned_phrases_for(&plan.language);
        never_say.extend(plan.forbidden_phrases.iter().map(String::as_str));
        never_say.extend(self.extra_banned_phrases.iter().map(String::as_str));
        render_system_prompt(plan, journey_name, &never_say)
    }

    #[must_use]
    pub fn validator_for(&self, plan: &DayPlan) -> MessageValidator {
        MessageValidator::for_plan(plan, self.classifier.store(), &self.extra_banned_phrases)
    }

    /// Classify the message, pick the next state, and render both prompts.
    #[must_use]
    pub fn plan_turn(&self, input: &TurnInput<'_>) -> TurnPlan {
        let intent = self.classify(input.message, input.state, input.plan);
        let next_state = self.engine.next_for(input.state, intent, input.counters);
        let counters = input.counters.after_entering(next_state);

        tracing::debug!(
            %intent,
            from = %input.state,
            to = %next_state,
            clarify_count = counters.clarify_count,
            task_support_count = counters.task_support_count,
            "Planned turn"
        );

        TurnPlan {
            intent,
            previous_state: input.state,
            next_state,
            counters,
            system_prompt: self.system_prompt(input.plan, input.journey_name),
            state_prompt: build_state_prompt(next_state, input.plan, input.message, intent),
        }
    }

    /// Apply the day's reply policy to the model's raw text.
    #[must_use]
    pub fn finalize_reply(&self, plan: &DayPlan, state: ConversationState, raw: &str) -> String {
        self.validator_for(plan).validate(raw, state)
    }
}
