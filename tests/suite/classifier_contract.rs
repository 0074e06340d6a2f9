//! Classifier behavior on the documented contract cases.

use facilitator_core::{classify, classify_in, next_state};
use facilitator_types::{ConversationState, Intent, Language};
use proptest::prelude::*;

const CQ: ConversationState = ConversationState::CoreQuestion;

#[test]
fn pure_uncertainty_in_core_question_is_confused() {
    for message in ["not sure", "לא בטוח", "no idea"] {
        assert_eq!(classify(message, CQ), Intent::Confused, "{message}");
    }
}

#[test]
fn interrupted_uncertainty_is_still_confusion() {
    for message in [
        "I'm not really sure",
        "I really have no idea",
        "I honestly have no idea",
        "I genuinely don't know",
        "i dont really know",
        "I don't know, maybe",
        "not sure, perhaps",
    ] {
        assert_eq!(classify(message, CQ), Intent::Confused, "{message}");
    }
}

#[test]
fn finished_task_reply_mentioning_an_example_completes() {
    let message = "For example, yesterday I yelled at my kid during dinner and felt awful about it";
    let intent = classify(message, ConversationState::Task);
    assert_eq!(intent, Intent::Completed);
    assert_eq!(
        next_state(ConversationState::Task, intent, 0, 0),
        ConversationState::Closure
    );
}

#[test]
fn uncertainty_then_content_is_an_answer() {
    assert_eq!(
        classify("I don't know, pressure from work", CQ),
        Intent::AnswerCore
    );
}

#[test]
fn negated_clarity_with_action_question_is_confused() {
    for message in ["not clear what to do", "לא ברור מה לעשות"] {
        assert_eq!(classify(message, CQ), Intent::Confused, "{message}");
    }
}

#[test]
fn short_single_topic_answers() {
    for message in ["Pressure", "לחץ", "Fear"] {
        assert_eq!(classify(message, CQ), Intent::AnswerCore, "{message}");
    }
}

#[test]
fn skip_only_as_a_directive() {
    for message in ["skip", "let's move on", "next please"] {
        assert_eq!(classify(message, CQ), Intent::Skip, "{message}");
    }
    for message in ["next week I have a deadline", "I want to move on from the stress"] {
        assert_ne!(classify(message, CQ), Intent::Skip, "{message}");
    }
}

#[test]
fn hebrew_journey_classifies_english_reply() {
    assert_eq!(
        classify_in("no idea", CQ, &Language::HEBREW),
        Intent::Confused
    );
}

proptest! {
    #[test]
    fn classification_is_total_and_deterministic(message in any::<String>(), index in 0usize..9) {
        let state = ConversationState::ALL[index];
        let first = classify(&message, state);
        prop_assert!(Intent::ALL.contains(&first));
        prop_assert_eq!(classify(&message, state), first);
    }

    #[test]
    fn mixed_script_messages_never_panic(message in "[a-z\u{05D0}-\u{05EA} ,.?!'\u{05B0}-\u{05BC}-]{0,80}") {
        for state in ConversationState::ALL {
            let _ = classify_in(&message, state, &Language::HEBREW);
        }
    }
}
