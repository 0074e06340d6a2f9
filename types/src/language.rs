use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Language tag used to key lexicon bundles and default phrasing.
///
/// Tags are normalized at construction: common aliases fold onto the
/// canonical `"hebrew"` / `"english"` tags and anything else is kept as a
/// lowercase, trimmed tag so new bundles can be registered without code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Language(Cow<'static, str>);

impl Language {
    pub const HEBREW: Language = Language(Cow::Borrowed("hebrew"));
    pub const ENGLISH: Language = Language(Cow::Borrowed("english"));

    #[must_use]
    pub fn new(raw: &str) -> Self {
        let tag = raw.trim().to_lowercase();
        match tag.as_str() {
            "he" | "heb" | "he-il" | "iw" | "hebrew" | "עברית" => Self::HEBREW,
            "" | "en" | "eng" | "en-us" | "en-gb" | "english" => Self::ENGLISH,
            _ => Self(Cow::Owned(tag)),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_hebrew(&self) -> bool {
        *self == Self::HEBREW
    }

    /// Human-readable name used inside prompts ("Reply in Hebrew").
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.0.into_owned()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
