//! Reply validation properties.

use facilitator_core::validate;
use facilitator_types::ConversationState;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "great", "question", "?", "!", ".", ",", "as", "an", "ai", "I", "hope", "this", "helps",
    "what", "now", "שאלה", "מצוינת", "מה", "\t", "\n", "  ", "deep", "dive", "?!", "..",
];

fn reply() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..24).prop_map(|words| words.join(" "))
}

#[test]
fn banned_phrases_are_removed_case_insensitively() {
    assert_eq!(
        validate("As an AI, I think you did well.", ConversationState::Closure),
        "I think you did well."
    );
}

#[test]
fn nested_banned_phrases_leave_nothing_behind() {
    let text = format!("Wow, {}{}now.", "great ".repeat(10), "question ".repeat(10));
    let once = validate(&text, ConversationState::Interpret);
    assert_eq!(once, "Wow, now.");
    assert_eq!(validate(&once, ConversationState::Interpret), once);
}

proptest! {
    #[test]
    fn validation_is_idempotent(text in reply(), index in 0usize..9) {
        let state = ConversationState::ALL[index];
        let once = validate(&text, state);
        prop_assert_eq!(validate(&once, state), once);
    }

    #[test]
    fn at_most_one_question_mark_outside_support_loops(text in reply(), index in 0usize..9) {
        let state = ConversationState::ALL[index];
        let out = validate(&text, state);
        if !state.is_support_loop() {
            prop_assert!(out.matches('?').count() <= 1, "{out:?}");
        }
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn arbitrary_text_never_panics(text in any::<String>()) {
        let _ = validate(&text, ConversationState::Task);
    }
}
