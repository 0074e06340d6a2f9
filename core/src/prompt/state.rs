use std::collections::HashSet;
use std::fmt::Write;

use facilitator_types::{CommonBlock, ConversationState, DayPlan, Intent, truncate_with_ellipsis};

use crate::classifier::Utterance;
use crate::lexicon::builtin_store;

/// Graphemes of the participant's message quoted back into the prompt.
const QUOTE_MAX: usize = 280;

/// Instruction block for the state the conversation just entered.
///
/// `intent` is the classification of `last_message` that led here; it
/// changes the wording when the participant skipped or stayed stuck.
#[must_use]
pub fn build_state_prompt(
    state: ConversationState,
    plan: &DayPlan,
    last_message: &str,
    intent: Intent,
) -> String {
    let mut buf = String::with_capacity(1024);
    let _ = writeln!(buf, "## Current step: {state}");
    let _ = writeln!(buf);
    let quoted = truncate_with_ellipsis(last_message, QUOTE_MAX);
    if !quoted.is_empty() {
        let _ = writeln!(buf, "Participant's last message: \"{quoted}\"");
        let _ = writeln!(buf, "Detected intent: {intent}");
        let _ = writeln!(buf);
    }

    match state {
        ConversationState::Start => start(&mut buf, plan),
        ConversationState::Orientation => orientation(&mut buf, plan),
        ConversationState::CoreQuestion => core_question(&mut buf, plan, intent),
        ConversationState::Clarify => clarify(&mut buf, plan),
        ConversationState::Interpret => interpret(&mut buf, plan),
        ConversationState::Task => task(&mut buf, plan, intent),
        ConversationState::TaskSupport => task_support(&mut buf, plan, last_message),
        ConversationState::Closure => closure(&mut buf, plan),
        ConversationState::Done => done(&mut buf),
    }
    buf
}

fn start(buf: &mut String, plan: &DayPlan) {
    let _ = writeln!(
        buf,
        "Greet the participant in one or two warm sentences and welcome them to day {}.",
        plan.day
    );
    let _ = writeln!(buf, "Do not ask the core question yet.");
}

fn orientation(buf: &mut String, plan: &DayPlan) {
    let _ = writeln!(buf, "Set the scene for today in your own words.");
    let _ = writeln!(buf, "- Context: {}", plan.orientation.context);
    let _ = writeln!(buf, "- Rule of the day: {}", plan.orientation.rule);
    let _ = writeln!(
        buf,
        "Do not ask the core question yet. End by inviting the participant to begin."
    );
}

fn core_question(buf: &mut String, plan: &DayPlan, intent: Intent) {
    let question = &plan.core_question;
    match intent {
        Intent::Skip => {
            let _ = writeln!(
                buf,
                "The participant asked to skip this question. Do not repeat it word for word and do not pressure them."
            );
            let _ = writeln!(
                buf,
                "Acknowledge that in half a sentence, then offer a lighter way to answer: a single word, a quick example, or a choice between two options."
            );
            let _ = writeln!(buf, "The question you are making easier: \"{}\"", question.text);
        }
        Intent::Confused => {
            let _ = writeln!(
                buf,
                "The participant is still unsure after earlier clarifications. Give one concrete example answer, then ask the question again in the simplest words you can:"
            );
            let _ = writeln!(buf, "\"{}\"", question.text);
        }
        _ => {
            let _ = writeln!(
                buf,
                "Ask today's core question, in your own voice and without adding a second question:"
            );
            let _ = writeln!(buf, "\"{}\"", question.text);
        }
    }
    if question.is_multiple_choice() {
        let _ = writeln!(buf, "Offer exactly these options:");
        for option in &question.options {
            let _ = writeln!(buf, "- {option}");
        }
    }
    if let Some(validation) = question.validation.as_deref() {
        let _ = writeln!(buf, "A usable answer: {validation}");
    }
}

fn clarify(buf: &mut String, plan: &DayPlan) {
    let _ = writeln!(
        buf,
        "The participant did not understand the core question. Rephrase it in simpler, more concrete words."
    );
    let _ = writeln!(buf, "Do not repeat the original wording verbatim:");
    let _ = writeln!(buf, "\"{}\"", plan.core_question.text);
    let _ = writeln!(buf, "You may give one short example of an answer.");
    let _ = writeln!(
        buf,
        "End with a narrowed question that can be answered in a few words."
    );
}

fn interpret(buf: &mut String, plan: &DayPlan) {
    let _ = writeln!(
        buf,
        "Reflect the participant's answer back in one sentence, using their own words."
    );
    let _ = writeln!(
        buf,
        "- What to look for: {}",
        plan.guided_interpretation.pattern_hint
    );
    let _ = writeln!(
        buf,
        "- Bridge to the task: {}",
        plan.guided_interpretation.task_bridge
    );
    let _ = writeln!(buf, "Do not present the task itself yet and do not ask a question.");
}

fn task(buf: &mut String, plan: &DayPlan, intent: Intent) {
    let task = &plan.task;
    if intent == Intent::Skip {
        let _ = writeln!(
            buf,
            "The participant wants to skip the task. Say that is fine, then offer the smallest possible version of it."
        );
    } else {
        let _ = writeln!(buf, "Present today's task.");
    }
    let _ = writeln!(buf, "- Title: {} ({})", task.title, task.time_estimate);
    let _ = writeln!(buf, "- Instruction: {}", task.instruction);
    let _ = writeln!(buf, "- Why it helps: {}", task.rationale);
    let _ = writeln!(buf, "- Done when: {}", task.completion_signal);
    let _ = writeln!(
        buf,
        "If the participant's message already meets the completion signal, acknowledge it briefly instead."
    );
    let _ = writeln!(buf, "Otherwise end with the task question: \"{}\"", task.question);
}

fn task_support(buf: &mut String, plan: &DayPlan, last_message: &str) {
    let task = &plan.task;
    let _ = writeln!(
        buf,
        "The participant is stuck on the task: {}",
        task.instruction
    );
    match matching_block(plan, last_message) {
        Some(block) => {
            let _ = writeln!(buf, "This looks like a known block: {}", block.block);
            let _ = writeln!(buf, "- What helps: {}", block.remedy);
            if let Some(example) = block.example.as_deref() {
                let _ = writeln!(buf, "- Example to offer: {example}");
            }
        }
        None => {
            let _ = writeln!(
                buf,
                "Offer one concrete aid: a fill-in template, a short example, or a simpler version of the task."
            );
        }
    }
    let _ = writeln!(
        buf,
        "Keep it to the same task. End by checking whether they can start now."
    );
}

fn closure(buf: &mut String, plan: &DayPlan) {
    let _ = writeln!(buf, "Close the day.");
    let _ = writeln!(buf, "- Acknowledge: {}", plan.closure.acknowledge);
    let _ = writeln!(buf, "- Preview of tomorrow: {}", plan.closure.preview);
    let _ = writeln!(buf, "Do not ask any question.");
}

fn done(buf: &mut String) {
    let _ = writeln!(
        buf,
        "Today's conversation is complete. Reply in one short, kind sentence without opening a new topic or asking a question."
    );
}

/// The common block sharing the most content words with `message`, if any
/// shares at least one.
#[must_use]
pub fn matching_block<'a>(plan: &'a DayPlan, message: &str) -> Option<&'a CommonBlock> {
    let function_words = &builtin_store().for_language(&plan.language).function_words;
    let content = |text: &str| -> HashSet<String> {
        Utterance::parse(text)
            .into_tokens()
            .into_iter()
            .filter(|word| !function_words.contains_word(word))
            .collect()
    };

    let said = content(message);
    if said.is_empty() {
        return None;
    }

    let mut best: Option<(&CommonBlock, usize)> = None;
    for block in &plan.task.common_blocks {
        let score = content(&block.block).intersection(&said).count();
        if score > 0 && best.is_none_or(|(_, top)| score > top) {
            best = Some((block, score));
        }
    }
    best.map(|(block, _)| block)
}

#[cfg(test)]
mod tests {
    use facilitator_types::{
        CommonBlock, ConversationState, DayPlan, Intent, Language, StepRecord,
    };

    use super::{build_state_prompt, matching_block};
    use crate::day_plan::resolve_day_plan;

    fn plan() -> DayPlan {
        let mut plan = resolve_day_plan(&StepRecord::new(2), &Language::ENGLISH);
        plan.task.common_blocks = vec![
            CommonBlock {
                block: "Can't think of any example".to_string(),
                remedy: "Suggest looking at yesterday evening.".to_string(),
                example: Some("Yesterday at dinner I snapped at my son.".to_string()),
            },
            CommonBlock {
                block: "Not enough time".to_string(),
                remedy: "Shrink it to one minute.".to_string(),
                example: None,
            },
        ];
        plan
    }

    #[test]
    fn core_question_is_quoted() {
        let plan = plan();
        let prompt = build_state_prompt(
            ConversationState::CoreQuestion,
            &plan,
            "ready",
            Intent::Other,
        );
        assert!(prompt.starts_with("## Current step: CORE_QUESTION"));
        assert!(prompt.contains(&format!("\"{}\"", plan.core_question.text)));
        assert!(prompt.contains("Participant's last message: \"ready\""));
    }

    #[test]
    fn skip_offers_a_lighter_way_in() {
        let prompt = build_state_prompt(
            ConversationState::CoreQuestion,
            &plan(),
            "skip",
            Intent::Skip,
        );
        assert!(prompt.contains("asked to skip"));
        assert!(prompt.contains("lighter way to answer"));
    }

    #[test]
    fn clarify_rephrases_and_narrows() {
        let prompt = build_state_prompt(
            ConversationState::Clarify,
            &plan(),
            "what?",
            Intent::Confused,
        );
        assert!(prompt.contains("Do not repeat the original wording verbatim"));
        assert!(prompt.contains("End with a narrowed question"));
        assert!(prompt.contains("Detected intent: confused"));
    }

    #[test]
    fn task_support_uses_the_matching_block() {
        let prompt = build_state_prompt(
            ConversationState::TaskSupport,
            &plan(),
            "I don't have time for this",
            Intent::TaskHelp,
        );
        assert!(prompt.contains("known block: Not enough time"));
        assert!(prompt.contains("Shrink it to one minute."));
        assert!(!prompt.contains("Example to offer"));
    }

    #[test]
    fn task_support_without_a_match_offers_generic_aid() {
        let prompt = build_state_prompt(
            ConversationState::TaskSupport,
            &plan(),
            "help",
            Intent::TaskHelp,
        );
        assert!(prompt.contains("fill-in template"));
    }

    #[test]
    fn best_overlap_wins() {
        let plan = plan();
        let block = matching_block(&plan, "I can't think of a single example").unwrap();
        assert_eq!(block.block, "Can't think of any example");
        assert!(matching_block(&plan, "the and of").is_none());
    }

    #[test]
    fn long_messages_are_truncated_in_the_quote() {
        let long = "word ".repeat(200);
        let prompt = build_state_prompt(
            ConversationState::Interpret,
            &plan(),
            &long,
            Intent::Emotional,
        );
        assert!(prompt.contains("...\""));
        assert!(prompt.len() < long.len() + 1000);
    }

    #[test]
    fn empty_message_omits_the_quote() {
        let prompt = build_state_prompt(ConversationState::Start, &plan(), "  ", Intent::Other);
        assert!(!prompt.contains("Participant's last message"));
        assert!(prompt.contains("welcome them to day 2"));
    }

    #[test]
    fn closing_states_ask_nothing() {
        for state in [ConversationState::Closure, ConversationState::Done] {
            let prompt = build_state_prompt(state, &plan(), "thanks", Intent::Other);
            assert!(prompt.contains("question"), "{state}");
            assert!(!prompt.contains('?'), "{state}");
        }
    }
}
