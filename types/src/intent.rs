use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classified purpose of a participant message within the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Checkin,
    AnswerCore,
    Confused,
    TaskHelp,
    Completed,
    Skip,
    Emotional,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown intent label: {0:?}")]
pub struct IntentParseError(pub String);

impl Intent {
    pub const ALL: [Intent; 8] = [
        Self::Checkin,
        Self::AnswerCore,
        Self::Confused,
        Self::TaskHelp,
        Self::Completed,
        Self::Skip,
        Self::Emotional,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checkin => "checkin",
            Self::AnswerCore => "answer_core",
            Self::Confused => "confused",
            Self::TaskHelp => "task_help",
            Self::Completed => "completed",
            Self::Skip => "skip",
            Self::Emotional => "emotional",
            Self::Other => "other",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, IntentParseError> {
        let key = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|intent| intent.as_str() == key)
            .ok_or_else(|| IntentParseError(raw.to_string()))
    }

    /// Whether this intent carries substance the facilitator can interpret.
    #[must_use]
    pub const fn is_substantive(self) -> bool {
        matches!(self, Self::AnswerCore | Self::Emotional)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = IntentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
