//! Transition engine properties.

use facilitator_core::{TransitionEngine, next_state};
use facilitator_types::{ConversationState, GuardCounters, Intent};
use proptest::prelude::*;

use ConversationState::{Clarify, CoreQuestion, Orientation, Task, TaskSupport};

#[test]
fn clarify_guard_is_bounded() {
    assert_eq!(next_state(CoreQuestion, Intent::Confused, 0, 0), Clarify);
    assert_eq!(next_state(CoreQuestion, Intent::Confused, 2, 0), CoreQuestion);
}

#[test]
fn task_support_guard_is_bounded() {
    assert_eq!(next_state(Task, Intent::TaskHelp, 0, 0), TaskSupport);
    assert_eq!(next_state(Task, Intent::TaskHelp, 0, 1), Task);
}

#[test]
fn repeated_confusion_cannot_loop_forever() {
    let mut state = CoreQuestion;
    let mut counters = GuardCounters::default();
    let mut visits = 0;
    for _ in 0..10 {
        let next = next_state(
            state,
            Intent::Confused,
            counters.clarify_count,
            counters.task_support_count,
        );
        if next == Clarify {
            visits += 1;
        }
        counters = counters.after_entering(next);
        state = next;
    }
    assert_eq!(visits, 2);
    assert_eq!(state, CoreQuestion);
}

#[test]
fn unknown_stored_state_recovers() {
    let engine = TransitionEngine::default();
    assert_eq!(
        engine.next_state_from_label("WRAP_UP", Intent::Completed, 0, 0),
        Orientation
    );
}

proptest! {
    #[test]
    fn next_state_is_total(
        state in 0usize..9,
        intent in 0usize..8,
        clarify in any::<u32>(),
        support in any::<u32>(),
    ) {
        let state = ConversationState::ALL[state];
        let intent = Intent::ALL[intent];
        let next = next_state(state, intent, clarify, support);
        prop_assert!(ConversationState::ALL.contains(&next));
        prop_assert_eq!(next_state(state, intent, clarify, support), next);
    }

    #[test]
    fn clarify_always_returns_to_the_question(
        intent in 0usize..8,
        clarify in 2u32..1000,
        support in any::<u32>(),
    ) {
        let intent = Intent::ALL[intent];
        prop_assert_eq!(next_state(Clarify, intent, clarify, support), CoreQuestion);
    }
}
