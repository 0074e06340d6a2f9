//! Language-appropriate default phrasing for synthesized day plans.

use facilitator_types::{CommonBlock, Language};

pub(super) struct Defaults {
    pub day_goal: &'static str,
    pub orientation_context: &'static str,
    pub orientation_rule: &'static str,
    pub core_question: &'static str,
    /// `{title}` is replaced by the step title.
    pub core_question_about: &'static str,
    pub pattern_hint: &'static str,
    pub task_bridge: &'static str,
    pub task_title: &'static str,
    pub time_estimate: &'static str,
    pub task_instruction: &'static str,
    pub task_question: &'static str,
    pub task_rationale: &'static str,
    pub completion_signal: &'static str,
    pub closure_acknowledge: &'static str,
    pub closure_preview: &'static str,
    pub block: &'static str,
    pub block_remedy: &'static str,
    pub block_example: &'static str,
}

impl Defaults {
    pub(super) fn core_question_for(&self, title: Option<&str>) -> String {
        match title {
            Some(title) => self.core_question_about.replace("{title}", title),
            None => self.core_question.to_string(),
        }
    }

    pub(super) fn common_blocks(&self) -> Vec<CommonBlock> {
        vec![CommonBlock {
            block: self.block.to_string(),
            remedy: self.block_remedy.to_string(),
            example: Some(self.block_example.to_string()),
        }]
    }
}

const ENGLISH: Defaults = Defaults {
    day_goal: "Notice one pattern that shows up in your day and take one small step with it.",
    orientation_context: "Today is about paying attention to what is already happening, without fixing anything yet.",
    orientation_rule: "Answer from your own experience, in your own words. There are no wrong answers.",
    core_question: "What is the one thing that weighed on you most this week?",
    core_question_about: "When you think about \"{title}\", what is the first thing that comes up for you?",
    pattern_hint: "Look for what repeats: a situation, a feeling, or a thought that keeps coming back.",
    task_bridge: "Let's turn what you noticed into one small, concrete action for today.",
    task_title: "One small step",
    time_estimate: "5 minutes",
    task_instruction: "Write down one concrete thing you will do differently today, and when you will do it.",
    task_question: "What is the one thing you will do, and when?",
    task_rationale: "Small, specific actions are easier to start and easier to notice.",
    completion_signal: "The participant shares a specific action with a time or situation attached.",
    closure_acknowledge: "Thank you for showing up and doing the work today.",
    closure_preview: "Tomorrow we will build on what you noticed today.",
    block: "Doesn't know where to start",
    block_remedy: "Offer a one-line starter the participant can complete.",
    block_example: "Today, when ___ happens, I will ___.",
};

const HEBREW: Defaults = Defaults {
    day_goal: "לזהות דפוס אחד שחוזר ביום-יום ולעשות איתו צעד קטן אחד.",
    orientation_context: "היום נתבונן במה שכבר קורה, בלי לנסות לתקן שום דבר עדיין.",
    orientation_rule: "עונים מהניסיון האישי ובמילים שלך. אין תשובות לא נכונות.",
    core_question: "מה הדבר האחד שהכי העסיק אותך השבוע?",
    core_question_about: "כשאת/ה חושב/ת על \"{title}\", מה הדבר הראשון שעולה לך?",
    pattern_hint: "חפש/י את מה שחוזר: מצב, תחושה או מחשבה שממשיכה לחזור.",
    task_bridge: "בוא/י נהפוך את מה ששמת לב אליו לפעולה קטנה וקונקרטית להיום.",
    task_title: "צעד קטן אחד",
    time_estimate: "5 דקות",
    task_instruction: "כתוב/כתבי דבר אחד קונקרטי שתעשה/י אחרת היום, ומתי.",
    task_question: "מה הדבר האחד שתעשה/י, ומתי?",
    task_rationale: "פעולות קטנות וספציפיות קל יותר להתחיל ולשים לב אליהן.",
    completion_signal: "המשתתף/ת משתף/ת פעולה ספציפית עם זמן או מצב מוגדר.",
    closure_acknowledge: "תודה שהגעת ועשית את העבודה היום.",
    closure_preview: "מחר נמשיך לבנות על מה ששמת לב אליו היום.",
    block: "לא יודע/ת מאיפה להתחיל",
    block_remedy: "להציע משפט פתיחה קצר שאפשר להשלים.",
    block_example: "היום, כש___ קורה, אני אעשה ___.",
};

/// Defaults for `language`; anything but Hebrew uses English phrasing.
pub(super) fn for_language(language: &Language) -> &'static Defaults {
    if language.is_hebrew() { &HEBREW } else { &ENGLISH }
}
