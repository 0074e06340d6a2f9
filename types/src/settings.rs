//! Resolved configuration types shared across crates.
//!
//! Raw TOML deserialization structs (with `Option` fields) stay private in
//! `facilitator-config`. The loader resolves them into these types at the
//! parse boundary, so a value of these types is already validated.

use thiserror::Error;

use crate::LexiconSource;

/// `Clarify` may be entered while `clarify_count` is below this cap.
pub const DEFAULT_MAX_CLARIFICATIONS: u32 = 2;
/// `TaskSupport` may be entered while `task_support_count` is below this cap.
pub const DEFAULT_MAX_TASK_SUPPORT: u32 = 1;
/// Grapheme length at which an otherwise unmatched message reads as emotional.
pub const DEFAULT_EMOTIONAL_MIN_CHARS: usize = 100;
/// Grapheme length at which an otherwise unmatched `Task` reply reads as done.
pub const DEFAULT_TASK_COMPLETION_MIN_CHARS: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("classifier.emotional_min_chars must be greater than zero")]
    ZeroEmotionalThreshold,
    #[error("classifier.task_completion_min_chars must be greater than zero")]
    ZeroCompletionThreshold,
    #[error("lexicon bundle #{index} has no language tag")]
    UnnamedLexicon { index: usize },
}

/// Caps for the two bounded side-loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardLimits {
    pub max_clarifications: u32,
    pub max_task_support: u32,
}

impl Default for GuardLimits {
    fn default() -> Self {
        Self {
            max_clarifications: DEFAULT_MAX_CLARIFICATIONS,
            max_task_support: DEFAULT_MAX_TASK_SUPPORT,
        }
    }
}

/// Length cutoffs used by the classifier's state-sensitive defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierThresholds {
    emotional_min_chars: usize,
    task_completion_min_chars: usize,
}

impl ClassifierThresholds {
    pub fn new(
        emotional_min_chars: usize,
        task_completion_min_chars: usize,
    ) -> Result<Self, SettingsError> {
        if emotional_min_chars == 0 {
            return Err(SettingsError::ZeroEmotionalThreshold);
        }
        if task_completion_min_chars == 0 {
            return Err(SettingsError::ZeroCompletionThreshold);
        }
        Ok(Self {
            emotional_min_chars,
            task_completion_min_chars,
        })
    }

    #[must_use]
    pub const fn emotional_min_chars(&self) -> usize {
        self.emotional_min_chars
    }

    #[must_use]
    pub const fn task_completion_min_chars(&self) -> usize {
        self.task_completion_min_chars
    }
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            emotional_min_chars: DEFAULT_EMOTIONAL_MIN_CHARS,
            task_completion_min_chars: DEFAULT_TASK_COMPLETION_MIN_CHARS,
        }
    }
}

/// Everything the facilitator engine is parameterized by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilitatorSettings {
    pub guards: GuardLimits,
    pub thresholds: ClassifierThresholds,
    /// Banned phrases appended to every language's base list.
    pub extra_banned_phrases: Vec<String>,
    /// Bundles that extend a built-in language or register a new one.
    pub lexicons: Vec<LexiconSource>,
}

#[cfg(test)]
mod tests {
    use super::{ClassifierThresholds, GuardLimits, SettingsError};

    #[test]
    fn guard_defaults_are_two_and_one() {
        let limits = GuardLimits::default();
        assert_eq!(limits.max_clarifications, 2);
        assert_eq!(limits.max_task_support, 1);
    }

    #[test]
    fn thresholds_reject_zero() {
        assert_eq!(
            ClassifierThresholds::new(0, 10),
            Err(SettingsError::ZeroEmotionalThreshold)
        );
        assert_eq!(
            ClassifierThresholds::new(10, 0),
            Err(SettingsError::ZeroCompletionThreshold)
        );
        let ok = ClassifierThresholds::new(80, 12).unwrap();
        assert_eq!(ok.emotional_min_chars(), 80);
        assert_eq!(ok.task_completion_min_chars(), 12);
    }
}
