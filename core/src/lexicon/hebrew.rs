//! Built-in Hebrew bundle.
//!
//! Entries are unpointed and cover masculine, feminine and plural forms
//! where participants use them. A single attached proclitic (ו ש ה ב ל כ מ)
//! is tolerated at match time, so "ולא יודעת" matches "לא יודעת".

use facilitator_types::{Language, LexiconSource, owned_list};

const SKIP_DIRECTIVES: &[&str] = &[
    "דלג",
    "תדלג",
    "תדלגי",
    "תדלגו",
    "לדלג",
    "נדלג",
    "דילוג",
    "הבא",
    "הבאה",
    "הלאה",
    "נמשיך",
    "להמשיך",
    "תמשיך",
    "תמשיכי",
    "נעבור",
    "לעבור",
    "תעבור",
    "תעברי",
];

const REQUEST_FRAMES: &[&str] = &[
    "אפשר",
    "אפשר בבקשה",
    "בוא",
    "בואי",
    "בואו",
    "אני רוצה",
    "רוצה",
    "אני מעדיף",
    "אני מעדיפה",
    "מעדיף",
    "מעדיפה",
    "תן לי",
    "תני לי",
    "אנחנו יכולים",
    "אולי",
    "פשוט",
    "נו",
    "יאללה",
];

const COURTESY_WORDS: &[&str] = &[
    "בבקשה",
    "עכשיו",
    "כרגע",
    "בינתיים",
    "היום",
    "כבר",
    "תודה",
    "אוקיי",
];

const SKIP_TARGETS: &[&str] = &[
    "זה",
    "את זה",
    "על זה",
    "שאלה",
    "את השאלה",
    "את השאלה הזאת",
    "את השאלה הזו",
    "על השאלה",
    "על השאלה הזאת",
    "על השאלה הזו",
    "על המשימה",
    "על התרגיל",
    "לשאלה הבאה",
    "לשלב הבא",
    "לחלק הבא",
    "לדבר הבא",
    "לדבר אחר",
    "למשימה",
    "הלאה",
];

const CLARIFICATION_REQUESTS: &[&str] = &[
    "תסביר",
    "תסבירי",
    "תסבירו",
    "אפשר להסביר",
    "אפשר הסבר",
    "תוכל להסביר",
    "תוכלי להסביר",
    "תחזור על השאלה",
    "תחזרי על השאלה",
    "אפשר לחזור על השאלה",
    "שוב את השאלה",
    "תנסח מחדש",
    "תנסחי מחדש",
    "לנסח מחדש",
    "מה הכוונה",
    "למה הכוונה",
    "מה זאת אומרת",
    "מה זה אומר",
    "לא הבנתי את השאלה",
    "לא הבנתי מה שאלת",
    "מה שאלת",
    "תפרט",
    "תפרטי",
];

const UNCERTAINTY: &[&str] = &[
    "לא בטוח",
    "לא בטוחה",
    "לא בטוחים",
    "אני לא בטוח",
    "אני לא בטוחה",
    "לא יודע",
    "לא יודעת",
    "לא יודעים",
    "אני לא יודע",
    "אני לא יודעת",
    "לא בדיוק יודע",
    "לא בדיוק יודעת",
    "אין לי מושג",
    "אין מושג",
    "לא ברור",
    "לא ברור לי",
    "לא הבנתי",
    "לא מבין",
    "לא מבינה",
    "אני לא מבין",
    "אני לא מבינה",
    "מבולבל",
    "מבולבלת",
    "אני מבולבל",
    "אני מבולבלת",
    "קשה לי לומר",
    "קשה להגיד",
    "לא סגור",
    "לא סגורה",
];

const HEDGES: &[&str] = &[
    "עדיין",
    "באמת",
    "בכלל",
    "בדיוק",
    "ממש",
    "כרגע",
    "עכשיו",
    "כל כך",
    "לגמרי",
    "על זה",
    "סליחה",
    "חח",
    "חחח",
];

const FILLERS: &[&str] = &[
    "אמ",
    "אממ",
    "הממ",
    "אה",
    "אהה",
    "נו",
    "טוב",
    "האמת",
    "האמת היא",
    "בכנות",
    "כאילו",
    "בעצם",
    "אוקיי",
    "אוקי",
    "כן",
    "וואלה",
    "תשמע",
    "תשמעי",
    "אני",
];

const CONNECTORS: &[&str] = &[
    "אולי",
    "אבל",
    "כנראה",
    "נראה לי",
    "אני חושב",
    "אני חושבת",
    "חושב",
    "חושבת",
    "מן הסתם",
    "יכול להיות",
    "ייתכן",
    "בעיקר",
    "אלא",
];

const INTERROGATIVES: &[&str] = &[
    "מה",
    "מה זה",
    "מה עכשיו",
    "איך",
    "למה",
    "מדוע",
    "איפה",
    "מתי",
    "מי",
    "איזה",
    "איזו",
    "אילו",
    "כמה",
];

const TASK_REFERENCES: &[&str] = &[
    "משימה",
    "המשימה",
    "תרגיל",
    "התרגיל",
    "מטלה",
    "המטלה",
    "שאלה",
    "השאלה",
    "הצעד",
    "מה לעשות",
    "מה צריך",
    "מה צריך לעשות",
    "מה עושים",
];

const FUNCTION_WORDS: &[&str] = &[
    "את", "של", "על", "עם", "אל", "מן", "זה", "זאת", "זו", "הוא", "היא", "אני", "אתה", "אנחנו",
    "הם", "הן", "לי", "לך", "לו", "לה", "לנו", "שלי", "שלך", "יש", "אין", "לא", "כן", "גם", "רק",
    "כי", "אם", "או", "אז", "כל", "עוד", "מאוד", "כבר", "היה", "הייתה", "יותר", "פה", "שם",
    "כמו", "ב", "ל", "ה", "ו", "ש", "מ", "כ",
];

const TASK_HELP: &[&str] = &[
    "איך",
    "איך עושים",
    "איך אני",
    "לא מצליח",
    "לא מצליחה",
    "לא יכול לחשוב",
    "לא יכולה לחשוב",
    "לא יכול לעשות",
    "לא יכולה לעשות",
    "תקוע",
    "תקועה",
    "עזרה",
    "צריך עזרה",
    "צריכה עזרה",
    "תעזור",
    "תעזרי",
    "עזור לי",
    "לא יודע מה לכתוב",
    "לא יודעת מה לכתוב",
    "מה לכתוב",
    "מה לעשות",
    "מאיפה להתחיל",
    "דוגמה",
    "דוגמא",
    "תן לי דוגמה",
    "תני לי דוגמה",
    "קשה לי לכתוב",
    "קשה לי להתחיל",
    "קשה לי עם המשימה",
    "קשה מדי",
];

const COMPLETION: &[&str] = &[
    "סיימתי",
    "גמרתי",
    "סיימנו",
    "עשיתי",
    "עשיתי את זה",
    "עשיתי את המשימה",
    "כתבתי",
    "הנה",
    "הנה מה שכתבתי",
    "בוצע",
    "זהו",
    "זה מוכן",
];

const CHECKIN: &[&str] = &[
    "שלום",
    "היי",
    "הי",
    "הלו",
    "בוקר טוב",
    "צהריים טובים",
    "ערב טוב",
    "מוכן",
    "מוכנה",
    "מוכנים",
    "אני מוכן",
    "אני מוכנה",
    "כן",
    "בטח",
    "יאללה",
    "נתחיל",
    "בוא נתחיל",
    "בואי נתחיל",
    "בואו נתחיל",
    "אוקיי",
    "סבבה",
    "אני פה",
    "אני כאן",
    "מה נשמע",
];

const BANNED_PHRASES: &[&str] = &[
    "שאלה מצוינת",
    "שאלה נהדרת",
    "איזו שאלה טובה",
    "כמודל שפה",
    "כבינה מלאכותית",
    "אני רק בינה מלאכותית",
    "מקווה שזה עוזר",
    "מקווה שזה עזר",
    "אל תהסס",
    "אל תהססי",
    "חשוב לציין",
    "בוא נצלול",
    "בואי נצלול",
    "מסע של גילוי עצמי",
    "מרחב בטוח",
    "אני מבין לגמרי",
    "אני מבינה לגמרי",
];

pub(super) fn source() -> LexiconSource {
    LexiconSource {
        language: Language::HEBREW,
        skip_directives: owned_list(SKIP_DIRECTIVES),
        request_frames: owned_list(REQUEST_FRAMES),
        courtesy_words: owned_list(COURTESY_WORDS),
        skip_targets: owned_list(SKIP_TARGETS),
        clarification_requests: owned_list(CLARIFICATION_REQUESTS),
        uncertainty: owned_list(UNCERTAINTY),
        hedges: owned_list(HEDGES),
        fillers: owned_list(FILLERS),
        connectors: owned_list(CONNECTORS),
        interrogatives: owned_list(INTERROGATIVES),
        task_references: owned_list(TASK_REFERENCES),
        function_words: owned_list(FUNCTION_WORDS),
        task_help: owned_list(TASK_HELP),
        completion: owned_list(COMPLETION),
        checkin: owned_list(CHECKIN),
        banned_phrases: owned_list(BANNED_PHRASES),
    }
}
