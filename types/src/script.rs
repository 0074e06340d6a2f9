//! Writing-system detection for participant messages.
//!
//! [`infer_language`] is a mechanism: it reports which built-in language a
//! message's letters belong to. The classifier decides what to do with that
//! fact (it consults the inferred bundle next to the plan's own).

use unicode_script::{Script, UnicodeScript};

use crate::Language;

/// Letter counts per script family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptProfile {
    pub hebrew: usize,
    pub latin: usize,
    pub other: usize,
}

impl ScriptProfile {
    #[must_use]
    pub fn of(text: &str) -> Self {
        let mut profile = Self::default();
        // Fast path: ASCII text has no Hebrew letters.
        if text.is_ascii() {
            profile.latin = text.bytes().filter(u8::is_ascii_alphabetic).count();
            return profile;
        }
        for c in text.chars().filter(|c| c.is_alphabetic()) {
            match c.script() {
                Script::Hebrew => profile.hebrew += 1,
                Script::Latin => profile.latin += 1,
                _ => profile.other += 1,
            }
        }
        profile
    }

    #[must_use]
    pub fn letters(&self) -> usize {
        self.hebrew + self.latin + self.other
    }
}

/// Infer the built-in language of `text` from its letters.
///
/// Returns `None` when the text has no Hebrew or Latin letters (emoji,
/// punctuation, other scripts).
#[must_use]
pub fn infer_language(text: &str) -> Option<Language> {
    let profile = ScriptProfile::of(text);
    if profile.hebrew > 0 && profile.hebrew >= profile.latin {
        Some(Language::HEBREW)
    } else if profile.latin > 0 {
        Some(Language::ENGLISH)
    } else {
        None
    }
}
