//! Conversation state for one participant-day session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a participant's conversation for the current day stands.
///
/// `Start` is the only initial value and `Done` is absorbing. The happy path
/// is `Orientation -> CoreQuestion -> Interpret -> Task -> Closure -> Done`;
/// `Clarify` and `TaskSupport` are bounded side-loops that return to
/// `CoreQuestion` and `Task` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversationState {
    #[default]
    Start,
    Orientation,
    CoreQuestion,
    Clarify,
    Interpret,
    Task,
    TaskSupport,
    Closure,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown conversation state: {0:?}")]
pub struct StateParseError(pub String);

impl ConversationState {
    pub const ALL: [ConversationState; 9] = [
        Self::Start,
        Self::Orientation,
        Self::CoreQuestion,
        Self::Clarify,
        Self::Interpret,
        Self::Task,
        Self::TaskSupport,
        Self::Closure,
        Self::Done,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Orientation => "ORIENTATION",
            Self::CoreQuestion => "CORE_QUESTION",
            Self::Clarify => "CLARIFY",
            Self::Interpret => "INTERPRET",
            Self::Task => "TASK",
            Self::TaskSupport => "TASK_SUPPORT",
            Self::Closure => "CLOSURE",
            Self::Done => "DONE",
        }
    }

    /// Parse a stored state label. Case and `-`/`_`/space separators are ignored.
    pub fn parse(raw: &str) -> Result<Self, StateParseError> {
        let key: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_uppercase)
            .collect();
        let state = match key.as_str() {
            "START" => Self::Start,
            "ORIENTATION" => Self::Orientation,
            "COREQUESTION" => Self::CoreQuestion,
            "CLARIFY" => Self::Clarify,
            "INTERPRET" => Self::Interpret,
            "TASK" => Self::Task,
            "TASKSUPPORT" => Self::TaskSupport,
            "CLOSURE" => Self::Closure,
            "DONE" => Self::Done,
            _ => return Err(StateParseError(raw.to_string())),
        };
        Ok(state)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }

    /// States whose purpose is to clarify or help, where the one-question
    /// style contract is relaxed.
    #[must_use]
    pub const fn is_support_loop(self) -> bool {
        matches!(self, Self::Clarify | Self::TaskSupport)
    }

    /// States in which a help request is routed to `TaskSupport`.
    #[must_use]
    pub const fn accepts_task_help(self) -> bool {
        matches!(self, Self::Task | Self::Interpret)
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversationState {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
