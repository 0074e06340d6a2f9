//! Day plan resolution.
//!
//! A step that carries a complete structured plan is used as-is. Anything
//! else is synthesized from the step's loose fields with language-appropriate
//! defaults; a partial structured plan keeps what was authored and takes the
//! synthesized value for every blank field. The result is always complete.

mod defaults;

use facilitator_types::{
    Closure, CoreQuestion, DEFAULT_TONE_STYLE, DayPlan, DayTask, GuidedInterpretation, Language,
    Orientation, StepRecord, ToneProfile,
};

/// Resolve the plan for `step` in a journey conducted in `journey_language`.
#[must_use]
pub fn resolve_day_plan(step: &StepRecord, journey_language: &Language) -> DayPlan {
    let synthesized = synthesize(step, journey_language);
    let Some(stored) = &step.day_plan else {
        tracing::debug!(day = step.day_number, "Synthesized day plan from step fields");
        return synthesized;
    };

    let missing = stored.missing_fields();
    if missing.is_empty() {
        return stored.clone();
    }
    tracing::debug!(
        day = step.day_number,
        missing = missing.len(),
        "Completing partial stored day plan"
    );
    merge(stored.clone(), synthesized, journey_language)
}

fn synthesize(step: &StepRecord, language: &Language) -> DayPlan {
    let text = defaults::for_language(language);
    let or_default = |value: Option<&str>, fallback: &str| value.unwrap_or(fallback).to_string();

    DayPlan {
        day: step.day_number,
        language: language.clone(),
        tone_profile: ToneProfile::with_style(step.tone().unwrap_or(DEFAULT_TONE_STYLE)),
        day_goal: or_default(step.goal().or(step.description()), text.day_goal),
        orientation: Orientation {
            context: or_default(
                step.explanation().or(step.description()),
                text.orientation_context,
            ),
            rule: text.orientation_rule.to_string(),
        },
        core_question: CoreQuestion {
            text: text.core_question_for(step.title()),
            options: Vec::new(),
            validation: None,
        },
        guided_interpretation: GuidedInterpretation {
            pattern_hint: text.pattern_hint.to_string(),
            task_bridge: text.task_bridge.to_string(),
        },
        task: DayTask {
            title: or_default(step.title(), text.task_title),
            time_estimate: text.time_estimate.to_string(),
            instruction: or_default(step.task(), text.task_instruction),
            question: text.task_question.to_string(),
            rationale: text.task_rationale.to_string(),
            completion_signal: text.completion_signal.to_string(),
            common_blocks: text.common_blocks(),
        },
        closure: Closure {
            acknowledge: or_default(step.closing_message(), text.closure_acknowledge),
            preview: text.closure_preview.to_string(),
        },
        persona_signature: None,
        forbidden_phrases: Vec::new(),
    }
}

fn fill(target: &mut String, fallback: String) {
    if target.trim().is_empty() {
        *target = fallback;
    }
}

/// Authored fields win; blank ones take the synthesized value.
fn merge(mut plan: DayPlan, fallback: DayPlan, language: &Language) -> DayPlan {
    if plan.day == 0 {
        plan.day = fallback.day;
    }
    plan.language = language.clone();

    fill(&mut plan.tone_profile.style, fallback.tone_profile.style);
    fill(&mut plan.tone_profile.formality, fallback.tone_profile.formality);
    fill(&mut plan.tone_profile.verbosity, fallback.tone_profile.verbosity);
    fill(&mut plan.day_goal, fallback.day_goal);
    fill(&mut plan.orientation.context, fallback.orientation.context);
    fill(&mut plan.orientation.rule, fallback.orientation.rule);
    fill(&mut plan.core_question.text, fallback.core_question.text);
    fill(
        &mut plan.guided_interpretation.pattern_hint,
        fallback.guided_interpretation.pattern_hint,
    );
    fill(
        &mut plan.guided_interpretation.task_bridge,
        fallback.guided_interpretation.task_bridge,
    );

    let task = &mut plan.task;
    fill(&mut task.title, fallback.task.title);
    fill(&mut task.time_estimate, fallback.task.time_estimate);
    fill(&mut task.instruction, fallback.task.instruction);
    fill(&mut task.question, fallback.task.question);
    fill(&mut task.rationale, fallback.task.rationale);
    fill(&mut task.completion_signal, fallback.task.completion_signal);
    if task.common_blocks.is_empty() {
        task.common_blocks = fallback.task.common_blocks;
    }

    fill(&mut plan.closure.acknowledge, fallback.closure.acknowledge);
    fill(&mut plan.closure.preview, fallback.closure.preview);
    plan
}

#[cfg(test)]
mod tests {
    use facilitator_types::{DayPlan, Language, StepRecord};

    use super::resolve_day_plan;

    fn step() -> StepRecord {
        StepRecord {
            title: Some("Stress at work".to_string()),
            goal: Some("Name what drains you".to_string()),
            task: Some("List three moments that drained you today.".to_string()),
            closing_message: Some("Well done today.".to_string()),
            ..StepRecord::new(4)
        }
    }

    #[test]
    fn synthesized_plan_is_complete_and_maps_step_fields() {
        let plan = resolve_day_plan(&step(), &Language::ENGLISH);
        assert!(plan.is_complete(), "missing: {:?}", plan.missing_fields());
        assert_eq!(plan.day, 4);
        assert_eq!(plan.day_goal, "Name what drains you");
        assert_eq!(plan.task.title, "Stress at work");
        assert_eq!(plan.task.instruction, "List three moments that drained you today.");
        assert_eq!(plan.closure.acknowledge, "Well done today.");
        assert!(plan.core_question.text.contains("Stress at work"));
        assert_eq!(plan.tone_profile.style, "warm");
        assert_eq!(plan.task.common_blocks.len(), 1);
    }

    #[test]
    fn empty_step_gets_language_defaults() {
        let hebrew = resolve_day_plan(&StepRecord::new(1), &Language::HEBREW);
        assert!(hebrew.is_complete());
        assert_eq!(hebrew.language, Language::HEBREW);
        assert_eq!(hebrew.core_question.text, "מה הדבר האחד שהכי העסיק אותך השבוע?");

        let english = resolve_day_plan(&StepRecord::new(1), &Language::ENGLISH);
        assert_eq!(
            english.core_question.text,
            "What is the one thing that weighed on you most this week?"
        );
    }

    #[test]
    fn unknown_language_uses_english_phrasing() {
        let plan = resolve_day_plan(&StepRecord::new(2), &Language::new("french"));
        assert_eq!(plan.language.as_str(), "french");
        assert_eq!(plan.task.time_estimate, "5 minutes");
    }

    #[test]
    fn step_tone_sets_style_only() {
        let step = StepRecord {
            tone: Some("playful".to_string()),
            ..StepRecord::new(1)
        };
        let plan = resolve_day_plan(&step, &Language::ENGLISH);
        assert_eq!(plan.tone_profile.style, "playful");
        assert_eq!(plan.tone_profile.formality, "neutral");
        assert_eq!(plan.tone_profile.verbosity, "concise");
    }

    #[test]
    fn complete_stored_plan_is_returned_unchanged() {
        let mut stored = resolve_day_plan(&step(), &Language::HEBREW);
        stored.day_goal = "Authored goal".to_string();
        stored.persona_signature = Some("Dana".to_string());
        let with_plan = StepRecord {
            day_plan: Some(stored.clone()),
            ..step()
        };
        assert_eq!(resolve_day_plan(&with_plan, &Language::ENGLISH), stored);
    }

    #[test]
    fn partial_stored_plan_is_completed() {
        let mut partial = DayPlan::default();
        partial.core_question.text = "What do you avoid?".to_string();
        partial.forbidden_phrases = vec!["obviously".to_string()];
        let with_plan = StepRecord {
            day_plan: Some(partial),
            ..step()
        };
        let plan = resolve_day_plan(&with_plan, &Language::ENGLISH);
        assert!(plan.is_complete());
        assert_eq!(plan.day, 4);
        assert_eq!(plan.core_question.text, "What do you avoid?");
        assert_eq!(plan.day_goal, "Name what drains you");
        assert_eq!(plan.forbidden_phrases, ["obviously"]);
    }

    #[test]
    fn resolution_is_deterministic() {
        let step = step();
        assert_eq!(
            resolve_day_plan(&step, &Language::HEBREW),
            resolve_day_plan(&step, &Language::HEBREW)
        );
    }
}
