//! Whole-day walks through the facilitator, turn by turn.

use std::iter;

use facilitator_core::{Facilitator, TurnInput};
use facilitator_types::{ConversationState, GuardCounters, Intent, Language};

use crate::common::plan;

use ConversationState::{
    Clarify, Closure, CoreQuestion, Done, Interpret, Orientation, Task, TaskSupport,
};

/// Feed `script` from START and return the state reached after each message.
fn walk(
    facilitator: &Facilitator,
    language: &Language,
    script: &[&str],
) -> (Vec<ConversationState>, GuardCounters) {
    let plan = plan(language);
    let mut state = ConversationState::Start;
    let mut counters = GuardCounters::default();
    let mut visited = Vec::new();
    for message in script {
        let turn = facilitator.plan_turn(&TurnInput {
            message,
            state,
            counters,
            plan: &plan,
            journey_name: "Calm Mind",
        });
        assert_eq!(turn.previous_state, state);
        assert!(
            turn.state_prompt
                .starts_with(&format!("## Current step: {}", turn.next_state)),
            "{}",
            turn.state_prompt
        );
        state = turn.next_state;
        counters = turn.counters;
        visited.push(state);
    }
    (visited, counters)
}

#[test]
fn english_day_with_one_clarification_and_one_detour() {
    let (visited, counters) = walk(
        &Facilitator::default(),
        &Language::ENGLISH,
        &[
            "hi",
            "ready",
            "not sure",
            "ok",
            "pressure from my boss",
            "ok",
            "how do I start this?",
            "ok",
            "done",
            "thanks",
        ],
    );
    assert_eq!(
        visited,
        [
            Orientation,
            CoreQuestion,
            Clarify,
            CoreQuestion,
            Interpret,
            Task,
            TaskSupport,
            Task,
            Closure,
            Done,
        ]
    );
    assert_eq!(counters, GuardCounters::new(1, 1));
}

#[test]
fn hebrew_day_reaches_closure() {
    let (visited, counters) = walk(
        &Facilitator::default(),
        &Language::HEBREW,
        &["היי", "מוכנה", "לא בטוחה", "אוקיי", "לחץ מהעבודה", "בסדר", "סיימתי"],
    );
    assert_eq!(
        visited,
        [
            Orientation,
            CoreQuestion,
            Clarify,
            CoreQuestion,
            Interpret,
            Task,
            Closure,
        ]
    );
    assert_eq!(counters, GuardCounters::new(1, 0));
}

#[test]
fn persistent_confusion_cannot_loop_forever() {
    let script = ["hi", "ready"]
        .into_iter()
        .chain(iter::repeat_n("no idea", 12))
        .collect::<Vec<_>>();
    let (visited, counters) = walk(&Facilitator::default(), &Language::ENGLISH, &script);

    let clarify_visits = visited.iter().filter(|s| **s == Clarify).count();
    assert_eq!(clarify_visits, 2);
    assert_eq!(counters.clarify_count, 2);
    assert_eq!(visited.last(), Some(&CoreQuestion));
}

#[test]
fn repeated_task_help_gets_one_detour() {
    let (visited, counters) = walk(
        &Facilitator::default(),
        &Language::ENGLISH,
        &["hi", "ready", "fear", "ok", "help", "ok", "help me", "I'm stuck"],
    );
    assert_eq!(visited.iter().filter(|s| **s == TaskSupport).count(), 1);
    assert_eq!(visited.last(), Some(&Task));
    assert_eq!(counters.task_support_count, 1);
}

#[test]
fn skip_on_the_core_question_offers_a_lighter_answer() {
    let facilitator = Facilitator::default();
    let plan = plan(&Language::ENGLISH);
    let turn = facilitator.plan_turn(&TurnInput {
        message: "can we skip this question?",
        state: CoreQuestion,
        counters: GuardCounters::default(),
        plan: &plan,
        journey_name: "",
    });
    assert_eq!(turn.intent, Intent::Skip);
    assert_eq!(turn.next_state, CoreQuestion);
    assert!(turn.state_prompt.contains("lighter way to answer"));
}

#[test]
fn finalized_replies_follow_the_reply_policy() {
    let facilitator = Facilitator::default();
    let plan = plan(&Language::HEBREW);
    let reply = facilitator.finalize_reply(
        &plan,
        Task,
        "Great question! What did you notice? What else?",
    );
    assert!(!reply.to_lowercase().contains("great question"));
    assert_eq!(reply.matches('?').count(), 1);

    let support = facilitator.finalize_reply(&plan, TaskSupport, "What blocks you? Time? Energy?");
    assert_eq!(support.matches('?').count(), 3);
}
