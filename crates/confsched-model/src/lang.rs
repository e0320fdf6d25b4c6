//! Display languages and two-language text.

use serde::{Deserialize, Serialize};

/// A language the timetable can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    Japanese,
    English,
}

impl Lang {
    /// Resolve a display language from a locale tag such as `ja_JP.UTF-8`,
    /// `ja-JP` or `en`.
    ///
    /// Only Japanese is recognized; every other tag (including an empty one)
    /// renders in English.
    pub fn from_locale_tag(tag: &str) -> Lang {
        let primary = tag.split(['_', '-', '.', '@']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("ja") {
            Lang::Japanese
        } else {
            Lang::English
        }
    }

    pub fn is_japanese(self) -> bool {
        self == Lang::Japanese
    }
}

/// Text carried in both Japanese and English.
///
/// Which rendering is shown is decided by the caller at read time via
/// [`MultiLangText::get`], never at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiLangText {
    pub ja_title: String,
    pub en_title: String,
}

impl MultiLangText {
    pub fn new(ja_title: impl Into<String>, en_title: impl Into<String>) -> Self {
        Self {
            ja_title: ja_title.into(),
            en_title: en_title.into(),
        }
    }

    /// The rendering for `lang`.
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Japanese => &self.ja_title,
            Lang::English => &self.en_title,
        }
    }

    /// Case-insensitive substring match against either rendering.
    pub(crate) fn contains_ignore_case(&self, needle_lower: &str) -> bool {
        self.ja_title.to_lowercase().contains(needle_lower)
            || self.en_title.to_lowercase().contains(needle_lower)
    }
}
