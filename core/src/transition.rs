//! State transition engine.
//!
//! `next_state` is pure, total and deterministic. Guards run before the
//! per-state table:
//! - `confused` enters `CLARIFY` while `clarify_count` is below the cap,
//!   from any non-terminal state.
//! - `task_help` enters `TASK_SUPPORT` from `TASK` or `INTERPRET` while
//!   `task_support_count` is below the cap.
//!
//! Once a cap is reached the table applies, so repeated confusion or help
//! requests cannot stall the conversation.

use facilitator_types::{ConversationState, GuardCounters, GuardLimits, Intent};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionEngine {
    limits: GuardLimits,
}

impl TransitionEngine {
    #[must_use]
    pub const fn new(limits: GuardLimits) -> Self {
        Self { limits }
    }

    #[must_use]
    pub const fn limits(&self) -> GuardLimits {
        self.limits
    }

    #[must_use]
    pub fn next_state(
        &self,
        current: ConversationState,
        intent: Intent,
        clarify_count: u32,
        task_support_count: u32,
    ) -> ConversationState {
        if let Some(next) = self.guard(current, intent, clarify_count, task_support_count) {
            tracing::debug!(
                %current,
                %intent,
                clarify_count,
                task_support_count,
                %next,
                "Side-loop guard fired"
            );
            return next;
        }
        let next = table(current, intent);
        tracing::debug!(%current, %intent, %next, "State transition");
        next
    }

    /// [`next_state`](Self::next_state) with counters as stored by the caller.
    #[must_use]
    pub fn next_for(
        &self,
        current: ConversationState,
        intent: Intent,
        counters: GuardCounters,
    ) -> ConversationState {
        self.next_state(
            current,
            intent,
            counters.clarify_count,
            counters.task_support_count,
        )
    }

    /// Transition from a stored state label. A label that is not a known
    /// state recovers to `ORIENTATION`.
    #[must_use]
    pub fn next_state_from_label(
        &self,
        current: &str,
        intent: Intent,
        clarify_count: u32,
        task_support_count: u32,
    ) -> ConversationState {
        match ConversationState::parse(current) {
            Ok(state) => self.next_state(state, intent, clarify_count, task_support_count),
            Err(err) => {
                tracing::warn!(%err, "Recovering unknown conversation state to ORIENTATION");
                ConversationState::Orientation
            }
        }
    }

    fn guard(
        &self,
        current: ConversationState,
        intent: Intent,
        clarify_count: u32,
        task_support_count: u32,
    ) -> Option<ConversationState> {
        if current.is_terminal() {
            return None;
        }
        match intent {
            Intent::Confused if clarify_count < self.limits.max_clarifications => {
                Some(ConversationState::Clarify)
            }
            Intent::TaskHelp
                if current.accepts_task_help()
                    && task_support_count < self.limits.max_task_support =>
            {
                Some(ConversationState::TaskSupport)
            }
            _ => None,
        }
    }
}

const fn table(current: ConversationState, intent: Intent) -> ConversationState {
    use ConversationState::{
        Clarify, Closure, CoreQuestion, Done, Interpret, Orientation, Start, Task, TaskSupport,
    };
    match current {
        Start => Orientation,
        Orientation | Clarify => CoreQuestion,
        CoreQuestion => match intent {
            Intent::AnswerCore | Intent::Emotional => Interpret,
            _ => CoreQuestion,
        },
        Interpret | TaskSupport => Task,
        Task => match intent {
            Intent::Completed => Closure,
            _ => Task,
        },
        Closure | Done => Done,
    }
}

/// Transition with the default guard caps (2 clarifications, 1 task-support
/// detour).
#[must_use]
pub fn next_state(
    current: ConversationState,
    intent: Intent,
    clarify_count: u32,
    task_support_count: u32,
) -> ConversationState {
    TransitionEngine::default().next_state(current, intent, clarify_count, task_support_count)
}
