//! Timetable entries as delivered by the schedule feed.
//!
//! [`TimetableItem`] is a closed sum over talk sessions and special entries
//! (keynotes, breaks, ceremonies). Both variants carry the same
//! [`TimetableEntry`] attribute set, so code that only needs the common
//! attributes goes through [`TimetableItem::entry`] while code that cares
//! about the kind matches exhaustively.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::day::ConferenceDay;
use crate::lang::{Lang, MultiLangText};

const WEB_BASE_URL: &str = "https://2024.droidkaigi.jp";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimetableItemId(String);

impl TimetableItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimetableItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimetableItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimetableCategory {
    pub id: i32,
    pub title: MultiLangText,
}

/// Session type tag. Values the feed adds later are kept verbatim in
/// [`TimetableSessionType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimetableSessionType {
    Normal,
    WelcomeTalk,
    Other(String),
}

impl TimetableSessionType {
    pub fn as_str(&self) -> &str {
        match self {
            TimetableSessionType::Normal => "NORMAL",
            TimetableSessionType::WelcomeTalk => "WELCOME_TALK",
            TimetableSessionType::Other(raw) => raw,
        }
    }
}

impl From<String> for TimetableSessionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "NORMAL" => TimetableSessionType::Normal,
            "WELCOME_TALK" => TimetableSessionType::WelcomeTalk,
            _ => TimetableSessionType::Other(raw),
        }
    }
}

impl From<TimetableSessionType> for String {
    fn from(value: TimetableSessionType) -> Self {
        value.as_str().to_string()
    }
}

/// Venue tag of a room (the 2024 halls are named by letter).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    RoomF,
    RoomG,
    RoomH,
    RoomI,
    RoomJ,
    RoomIJ,
    Other(String),
}

impl RoomType {
    pub fn as_str(&self) -> &str {
        match self {
            RoomType::RoomF => "ROOM_F",
            RoomType::RoomG => "ROOM_G",
            RoomType::RoomH => "ROOM_H",
            RoomType::RoomI => "ROOM_I",
            RoomType::RoomJ => "ROOM_J",
            RoomType::RoomIJ => "ROOM_IJ",
            RoomType::Other(raw) => raw,
        }
    }
}

impl From<String> for RoomType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ROOM_F" => RoomType::RoomF,
            "ROOM_G" => RoomType::RoomG,
            "ROOM_H" => RoomType::RoomH,
            "ROOM_I" => RoomType::RoomI,
            "ROOM_J" => RoomType::RoomJ,
            "ROOM_IJ" => RoomType::RoomIJ,
            _ => RoomType::Other(raw),
        }
    }
}

impl From<RoomType> for String {
    fn from(value: RoomType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimetableRoom {
    pub id: i32,
    pub name: MultiLangText,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Column order in the timetable grid.
    pub sort: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableLanguage {
    /// `JAPANESE`, `ENGLISH`, or any other code the feed sends.
    pub lang_of_speaker: String,
    pub is_interpretation_target: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableAsset {
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub slide_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSpeaker {
    pub id: String,
    pub name: String,
    pub icon_url: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub tag_line: String,
}

/// Attributes shared by every kind of timetable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub id: TimetableItemId,
    pub title: MultiLangText,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub category: TimetableCategory,
    pub session_type: TimetableSessionType,
    pub room: TimetableRoom,
    #[serde(default)]
    pub target_audience: String,
    pub language: TimetableLanguage,
    #[serde(default)]
    pub asset: TimetableAsset,
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(default)]
    pub speakers: Vec<TimetableSpeaker>,
    pub description: MultiLangText,
    /// Cancellation or update notice.
    #[serde(default)]
    pub message: Option<MultiLangText>,
}

impl TimetableEntry {
    /// Whether the entry starts strictly before it ends. The feed does not
    /// guarantee this; nothing in this crate rejects unordered entries.
    pub fn is_time_ordered(&self) -> bool {
        self.starts_at < self.ends_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TimetableItem {
    Session(TimetableEntry),
    Special(TimetableEntry),
}

impl TimetableItem {
    pub fn entry(&self) -> &TimetableEntry {
        match self {
            TimetableItem::Session(entry) | TimetableItem::Special(entry) => entry,
        }
    }

    pub fn is_session(&self) -> bool {
        matches!(self, TimetableItem::Session(_))
    }

    pub fn id(&self) -> &TimetableItemId {
        &self.entry().id
    }

    pub fn title(&self) -> &MultiLangText {
        &self.entry().title
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.entry().starts_at
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.entry().ends_at
    }

    pub fn room(&self) -> &TimetableRoom {
        &self.entry().room
    }

    pub fn language(&self) -> &TimetableLanguage {
        &self.entry().language
    }

    pub fn speakers(&self) -> &[TimetableSpeaker] {
        &self.entry().speakers
    }

    /// The conference day the item starts on.
    pub fn day(&self) -> Option<ConferenceDay> {
        ConferenceDay::of(self.starts_at())
    }

    /// Signed span from start to end; negative for unordered entries.
    pub fn duration(&self) -> Duration {
        self.ends_at() - self.starts_at()
    }

    /// Whole minutes from start to end, truncated toward zero.
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Canonical web page of the item for `lang`.
    pub fn url(&self, lang: Lang) -> String {
        match lang {
            Lang::Japanese => format!("{}/timetable/{}", WEB_BASE_URL, self.id().value()),
            Lang::English => format!("{}/en/timetable/{}", WEB_BASE_URL, self.id().value()),
        }
    }

    /// Human-readable speaker language, including whether interpretation is
    /// offered. Codes other than `JAPANESE` and `ENGLISH` are returned as-is.
    pub fn supported_lang_string(&self, is_japanese_locale: bool) -> &str {
        let language = self.language();
        let interpreted = language.is_interpretation_target;
        match (language.lang_of_speaker.as_str(), is_japanese_locale) {
            ("JAPANESE", true) if interpreted => "日本語 (英語通訳あり)",
            ("JAPANESE", true) => "日本語",
            ("JAPANESE", false) if interpreted => "Japanese (with English Interpretation)",
            ("JAPANESE", false) => "Japanese",
            ("ENGLISH", true) if interpreted => "英語 (日本語通訳あり)",
            ("ENGLISH", true) => "英語",
            ("ENGLISH", false) if interpreted => "English (with Japanese Interpretation)",
            ("ENGLISH", false) => "English",
            (other, _) => other,
        }
    }

    pub(crate) fn matches_query(&self, needle_lower: &str) -> bool {
        let entry = self.entry();
        entry.title.contains_ignore_case(needle_lower)
            || entry.description.contains_ignore_case(needle_lower)
            || entry
                .speakers
                .iter()
                .any(|speaker| speaker.name.to_lowercase().contains(needle_lower))
    }
}

/// Items are identified by their id alone.
impl PartialEq for TimetableItem {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for TimetableItem {}

impl Hash for TimetableItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
