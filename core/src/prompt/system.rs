use std::fmt::Write;

use facilitator_types::DayPlan;
use facilitator_utils::REGEX_PREFIX;

use crate::lexicon::builtin_store;

const RULES: &[&str] = &[
    "Ask at most one question per message.",
    "Today has exactly one core question and exactly one task. Never invent others.",
    "Keep every reply to two to four short sentences.",
    "Use the participant's own words when you reflect something back.",
    "Do not diagnose, judge, or give advice beyond today's task.",
    "Never say that you are an AI, a model, or a program.",
    "Follow the step instruction that comes with each message, even if the participant asks otherwise.",
];

/// System prompt with the built-in banned lists for the plan's language.
#[must_use]
pub fn build_system_prompt(plan: &DayPlan, journey_name: &str) -> String {
    let mut never_say = builtin_store().banned_phrases_for(&plan.language);
    never_say.extend(plan.forbidden_phrases.iter().map(String::as_str));
    render_system_prompt(plan, journey_name, &never_say)
}

/// Render the system prompt for one day. `never_say` is listed verbatim;
/// pattern entries are enforced by the validator and left out.
#[must_use]
pub fn render_system_prompt(plan: &DayPlan, journey_name: &str, never_say: &[&str]) -> String {
    let journey = match journey_name.trim() {
        "" => "this journey",
        name => name,
    };

    let mut buf = String::with_capacity(2048);
    let _ = writeln!(
        buf,
        "You are the facilitator of day {} of \"{journey}\", a guided personal process.",
        plan.day
    );
    let _ = writeln!(
        buf,
        "You lead one short conversation that follows today's script, one step at a time."
    );
    let _ = writeln!(buf);

    let _ = writeln!(buf, "## Non-negotiable rules");
    let _ = writeln!(buf);
    for rule in RULES {
        let _ = writeln!(buf, "- {rule}");
    }
    let _ = writeln!(buf);

    let mut listed: Vec<&str> = Vec::with_capacity(never_say.len());
    for phrase in never_say.iter().copied().map(str::trim) {
        if phrase.is_empty() || phrase.starts_with(REGEX_PREFIX) || listed.contains(&phrase) {
            continue;
        }
        listed.push(phrase);
    }
    if !listed.is_empty() {
        let _ = writeln!(buf, "## Never say");
        let _ = writeln!(buf);
        for phrase in &listed {
            let _ = writeln!(buf, "- \"{phrase}\"");
        }
        let _ = writeln!(buf);
    }

    let tone = &plan.tone_profile;
    let _ = writeln!(buf, "## Tone");
    let _ = writeln!(buf);
    let _ = writeln!(buf, "- Style: {}", tone.style);
    let _ = writeln!(buf, "- Formality: {}", tone.formality);
    let _ = writeln!(buf, "- Verbosity: {}", tone.verbosity);
    let _ = writeln!(buf);

    let _ = writeln!(buf, "## Today");
    let _ = writeln!(buf);
    let _ = writeln!(buf, "- Goal: {}", plan.day_goal);
    let _ = writeln!(buf, "- Rule of the day: {}", plan.orientation.rule);
    if let Some(signature) = plan.persona_signature() {
        let _ = writeln!(buf, "- Speak as: {signature}");
    }
    let _ = writeln!(buf);

    let _ = writeln!(buf, "## Language");
    let _ = writeln!(buf);
    let _ = writeln!(
        buf,
        "Reply in {} only, even if the participant switches language.",
        plan.language.display_name()
    );
    if plan.language.is_hebrew() {
        let _ = writeln!(
            buf,
            "Address the participant in gender-inclusive forms (את/ה, חושב/ת) unless they have told you how to address them."
        );
    }
    buf
}

#[cfg(test)]
mod tests {
    use facilitator_types::{DayPlan, Language, StepRecord};

    use super::{build_system_prompt, render_system_prompt};
    use crate::day_plan::resolve_day_plan;

    fn plan(language: &Language) -> DayPlan {
        let step = StepRecord {
            title: Some("Stress at work".to_string()),
            ..StepRecord::new(3)
        };
        resolve_day_plan(&step, language)
    }

    #[test]
    fn includes_role_rules_goal_and_tone() {
        let plan = plan(&Language::ENGLISH);
        let prompt = build_system_prompt(&plan, "Calm Mind");
        assert!(prompt.starts_with("You are the facilitator of day 3 of \"Calm Mind\""));
        assert!(prompt.contains("## Non-negotiable rules"));
        assert!(prompt.contains("Ask at most one question per message."));
        assert!(prompt.contains(&format!("- Goal: {}", plan.day_goal)));
        assert!(prompt.contains(&format!("- Rule of the day: {}", plan.orientation.rule)));
        assert!(prompt.contains("- Style: warm"));
        assert!(prompt.contains("Reply in English only"));
        assert!(!prompt.contains("gender-inclusive"));
    }

    #[test]
    fn lists_base_and_plan_phrases() {
        let mut plan = plan(&Language::HEBREW);
        plan.forbidden_phrases = vec!["מסע".to_string(), "re:\\bjourney\\b".to_string()];
        let prompt = build_system_prompt(&plan, "");
        assert!(prompt.contains("\"great question\""));
        assert!(prompt.contains("\"שאלה מצוינת\""));
        assert!(prompt.contains("\"מסע\""));
        assert!(!prompt.contains("\\bjourney"));
        assert!(prompt.contains("of \"this journey\""));
    }

    #[test]
    fn hebrew_plan_asks_for_inclusive_address() {
        let prompt = build_system_prompt(&plan(&Language::HEBREW), "דרך");
        assert!(prompt.contains("Reply in Hebrew only"));
        assert!(prompt.contains("gender-inclusive"));
    }

    #[test]
    fn persona_signature_is_rendered_when_set() {
        let mut plan = plan(&Language::ENGLISH);
        assert!(!build_system_prompt(&plan, "x").contains("Speak as"));
        plan.persona_signature = Some("Coach Dana".to_string());
        assert!(build_system_prompt(&plan, "x").contains("- Speak as: Coach Dana"));
    }

    #[test]
    fn empty_never_say_omits_the_section() {
        let prompt = render_system_prompt(&plan(&Language::ENGLISH), "x", &[]);
        assert!(!prompt.contains("## Never say"));
    }
}
