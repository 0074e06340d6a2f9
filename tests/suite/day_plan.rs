//! Day plan resolution from stored steps.

use facilitator_core::resolve_day_plan;
use facilitator_types::{DayPlan, Language, StepRecord};
use proptest::prelude::*;

use crate::common::loose_step;

#[test]
fn resolution_is_deterministic() {
    let step = loose_step(5);
    for language in [Language::HEBREW, Language::ENGLISH] {
        assert_eq!(
            resolve_day_plan(&step, &language),
            resolve_day_plan(&step, &language)
        );
    }
}

#[test]
fn stored_plan_survives_a_json_round_trip_unchanged() {
    let authored = resolve_day_plan(&loose_step(2), &Language::HEBREW);
    let json = serde_json::json!({
        "day_number": 2,
        "title": "ignored when a full plan exists",
        "day_plan": authored,
    });
    let step: StepRecord = serde_json::from_value(json).unwrap();
    assert_eq!(resolve_day_plan(&step, &Language::ENGLISH), authored);
}

#[test]
fn partial_stored_plan_from_json_is_completed() {
    let step: StepRecord = serde_json::from_value(serde_json::json!({
        "day_number": 6,
        "day_plan": {
            "core_question": { "text": "מה את/ה דוחה?" },
            "task": { "common_blocks": [{ "block": "אין זמן", "remedy": "דקה אחת" }] }
        }
    }))
    .unwrap();
    let plan = resolve_day_plan(&step, &Language::HEBREW);
    assert!(plan.is_complete(), "missing: {:?}", plan.missing_fields());
    assert_eq!(plan.day, 6);
    assert_eq!(plan.core_question.text, "מה את/ה דוחה?");
    assert_eq!(plan.task.common_blocks.len(), 1);
    assert_eq!(plan.task.common_blocks[0].block, "אין זמן");
}

fn text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[ a-zא-ת]{0,12}")
}

proptest! {
    #[test]
    fn resolved_plans_are_always_complete(
        day in 0u32..400,
        title in text(),
        description in text(),
        goal in text(),
        task in text(),
        tone in text(),
        hebrew in any::<bool>(),
        with_empty_plan in any::<bool>(),
    ) {
        let step = StepRecord {
            title,
            description,
            goal,
            task,
            tone,
            day_plan: with_empty_plan.then(DayPlan::default),
            ..StepRecord::new(day)
        };
        let language = if hebrew { Language::HEBREW } else { Language::ENGLISH };
        let plan = resolve_day_plan(&step, &language);
        prop_assert!(plan.is_complete(), "missing: {:?}", plan.missing_fields());
        prop_assert_eq!(plan.language, language);
    }
}
