//! Day plan data model: the declarative script for one day of a journey.
//!
//! Pure data with no IO. A plan carries exactly one core question and
//! exactly one task; both are plain fields, so a second question or task is
//! unrepresentable. Every block deserializes with defaults so partially
//! authored plans can be read and completed by the resolver.

use serde::{Deserialize, Serialize};

use crate::Language;

pub const DEFAULT_TONE_STYLE: &str = "warm";
pub const DEFAULT_TONE_FORMALITY: &str = "neutral";
pub const DEFAULT_TONE_VERBOSITY: &str = "concise";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneProfile {
    pub style: String,
    pub formality: String,
    pub verbosity: String,
}

impl ToneProfile {
    /// Tone with the given style and the default formality and verbosity.
    #[must_use]
    pub fn with_style(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            ..Self::default()
        }
    }
}

impl Default for ToneProfile {
    fn default() -> Self {
        Self {
            style: DEFAULT_TONE_STYLE.to_string(),
            formality: DEFAULT_TONE_FORMALITY.to_string(),
            verbosity: DEFAULT_TONE_VERBOSITY.to_string(),
        }
    }
}

/// Opening block: why today matters and the one behavioral rule for the day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Orientation {
    pub context: String,
    pub rule: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreQuestion {
    pub text: String,
    /// Multiple-choice options; empty for an open question.
    pub options: Vec<String>,
    /// What counts as a usable answer, if the author constrained it.
    pub validation: Option<String>,
}

impl CoreQuestion {
    #[must_use]
    pub fn is_multiple_choice(&self) -> bool {
        !self.options.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidedInterpretation {
    pub pattern_hint: String,
    pub task_bridge: String,
}

/// A known way participants get stuck on the task, with its remedy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonBlock {
    pub block: String,
    pub remedy: String,
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayTask {
    pub title: String,
    pub time_estimate: String,
    pub instruction: String,
    pub question: String,
    pub rationale: String,
    pub completion_signal: String,
    pub common_blocks: Vec<CommonBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Closure {
    pub acknowledge: String,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPlan {
    pub day: u32,
    pub language: Language,
    pub tone_profile: ToneProfile,
    pub day_goal: String,
    pub orientation: Orientation,
    pub core_question: CoreQuestion,
    pub guided_interpretation: GuidedInterpretation,
    pub task: DayTask,
    pub closure: Closure,
    pub persona_signature: Option<String>,
    /// Phrases banned for this day on top of the language's base list.
    pub forbidden_phrases: Vec<String>,
}

impl DayPlan {
    /// Names of required text fields that are blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required: [(&'static str, &str); 17] = [
            ("tone_profile.style", self.tone_profile.style.as_str()),
            ("tone_profile.formality", self.tone_profile.formality.as_str()),
            ("tone_profile.verbosity", self.tone_profile.verbosity.as_str()),
            ("day_goal", self.day_goal.as_str()),
            ("orientation.context", self.orientation.context.as_str()),
            ("orientation.rule", self.orientation.rule.as_str()),
            ("core_question.text", self.core_question.text.as_str()),
            (
                "guided_interpretation.pattern_hint",
                self.guided_interpretation.pattern_hint.as_str(),
            ),
            (
                "guided_interpretation.task_bridge",
                self.guided_interpretation.task_bridge.as_str(),
            ),
            ("task.title", self.task.title.as_str()),
            ("task.time_estimate", self.task.time_estimate.as_str()),
            ("task.instruction", self.task.instruction.as_str()),
            ("task.question", self.task.question.as_str()),
            ("task.rationale", self.task.rationale.as_str()),
            ("task.completion_signal", self.task.completion_signal.as_str()),
            ("closure.acknowledge", self.closure.acknowledge.as_str()),
            ("closure.preview", self.closure.preview.as_str()),
        ];
        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// A plan is complete when every required text field is non-blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    #[must_use]
    pub fn persona_signature(&self) -> Option<&str> {
        self.persona_signature
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{DayPlan, ToneProfile};
    use crate::Language;

    #[test]
    fn empty_plan_reports_every_required_field() {
        let plan = DayPlan::default();
        let missing = plan.missing_fields();
        assert!(missing.contains(&"core_question.text"));
        assert!(missing.contains(&"task.question"));
        assert!(!missing.contains(&"tone_profile.style"));
        assert!(!plan.is_complete());
    }

    #[test]
    fn tone_defaults_are_warm_neutral_concise() {
        let tone = ToneProfile::default();
        assert_eq!(tone.style, "warm");
        assert_eq!(tone.formality, "neutral");
        assert_eq!(tone.verbosity, "concise");
        assert_eq!(ToneProfile::with_style("playful").verbosity, "concise");
    }

    #[test]
    fn partial_json_deserializes_with_defaults() {
        let plan: DayPlan = serde_json::from_value(serde_json::json!({
            "day": 3,
            "language": "he",
            "core_question": { "text": "מה מלחיץ אותך?" }
        }))
        .unwrap();
        assert_eq!(plan.day, 3);
        assert_eq!(plan.language, Language::HEBREW);
        assert_eq!(plan.core_question.text, "מה מלחיץ אותך?");
        assert!(plan.core_question.options.is_empty());
        assert_eq!(plan.tone_profile, ToneProfile::default());
    }

    #[test]
    fn blank_persona_signature_is_absent() {
        let plan = DayPlan {
            persona_signature: Some("   ".to_string()),
            ..DayPlan::default()
        };
        assert_eq!(plan.persona_signature(), None);
    }
}
