use serde::{Deserialize, Serialize};

use crate::ConversationState;

/// Per-day guard counters. Owned and persisted by the caller; the engine only
/// reads them to bound the clarification and task-support side-loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardCounters {
    pub clarify_count: u32,
    pub task_support_count: u32,
}

impl GuardCounters {
    #[must_use]
    pub const fn new(clarify_count: u32, task_support_count: u32) -> Self {
        Self {
            clarify_count,
            task_support_count,
        }
    }

    /// Counters the caller should persist after a transition into `next`.
    ///
    /// Every transition into `Clarify` or `TaskSupport` counts, including a
    /// repeated confusion while already clarifying.
    #[must_use]
    pub const fn after_entering(self, next: ConversationState) -> Self {
        match next {
            ConversationState::Clarify => Self {
                clarify_count: self.clarify_count.saturating_add(1),
                ..self
            },
            ConversationState::TaskSupport => Self {
                task_support_count: self.task_support_count.saturating_add(1),
                ..self
            },
            _ => self,
        }
    }
}
