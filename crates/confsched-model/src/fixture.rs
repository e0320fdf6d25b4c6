//! Sample items for previews and tests.

use chrono::{DateTime, Duration, Utc};

use crate::day::ConferenceDay;
use crate::item::{
    RoomType, TimetableAsset, TimetableCategory, TimetableEntry, TimetableItem, TimetableItemId,
    TimetableLanguage, TimetableRoom, TimetableSessionType, TimetableSpeaker,
};
use crate::lang::MultiLangText;

/// `hour:minute` in UTC+9 on `day`.
fn at(day: ConferenceDay, hour: i64, minute: i64) -> DateTime<Utc> {
    day.start() + Duration::hours(hour) + Duration::minutes(minute)
}

impl TimetableItem {
    /// A cancelled architecture talk on 2024-09-12, 10:30-10:50 UTC+9.
    pub fn fake_session() -> TimetableItem {
        TimetableItem::Session(TimetableEntry {
            id: TimetableItemId::new("2"),
            title: MultiLangText::new(
                "DroidKaigiのアプリのアーキテクチャ",
                "DroidKaigi App Architecture",
            ),
            starts_at: at(ConferenceDay::ConferenceDay1, 10, 30),
            ends_at: at(ConferenceDay::ConferenceDay1, 10, 50),
            category: TimetableCategory {
                id: 28654,
                title: MultiLangText::new(
                    "Android FrameworkとJetpack",
                    "Android Framework and Jetpack",
                ),
            },
            session_type: TimetableSessionType::Normal,
            room: TimetableRoom {
                id: 1,
                name: MultiLangText::new("Room1", "Room2"),
                room_type: RoomType::RoomF,
                sort: 1,
            },
            target_audience: "For App developer アプリ開発者向け".to_string(),
            language: TimetableLanguage {
                lang_of_speaker: "JAPANESE".to_string(),
                is_interpretation_target: true,
            },
            asset: TimetableAsset {
                video_url: Some("https://www.youtube.com/watch?v=hFdKCyJ-Z9A".to_string()),
                slide_url: Some("https://droidkaigi.jp/2021/".to_string()),
            },
            levels: vec!["INTERMEDIATE".to_string()],
            speakers: vec![
                TimetableSpeaker {
                    id: "1".to_string(),
                    name: "taka".to_string(),
                    icon_url: "https://github.com/takahirom.png".to_string(),
                    bio: "Likes Android".to_string(),
                    tag_line: "Android Engineer".to_string(),
                },
                TimetableSpeaker {
                    id: "2".to_string(),
                    name: "ry".to_string(),
                    icon_url: "https://github.com/ry-itto.png".to_string(),
                    bio: "Likes iOS".to_string(),
                    tag_line: "iOS Engineer".to_string(),
                },
            ],
            description: MultiLangText::new(
                "これはディスクリプションです。\nこれはディスクリプションです。\nhttps://github.com/DroidKaigi/conference-app-2024 これはURLです。\nこれはディスクリプションです。",
                "This is a description.\nThis is a description.\nhttps://github.com/DroidKaigi/conference-app-2024 This is a URL.\nThis is a description.",
            ),
            message: Some(MultiLangText::new(
                "このセッションは事情により中止となりました",
                "This session has been cancelled due to circumstances.",
            )),
        })
    }

    /// The opening talk on 2024-09-12, 10:00-10:20 UTC+9, English with interpretation.
    pub fn fake_special() -> TimetableItem {
        TimetableItem::Special(TimetableEntry {
            id: TimetableItemId::new("welcome"),
            title: MultiLangText::new("ウェルカムトーク", "Welcome Talk"),
            starts_at: at(ConferenceDay::ConferenceDay1, 10, 0),
            ends_at: at(ConferenceDay::ConferenceDay1, 10, 20),
            category: TimetableCategory {
                id: 0,
                title: MultiLangText::new("その他", "Other"),
            },
            session_type: TimetableSessionType::WelcomeTalk,
            room: TimetableRoom {
                id: 6,
                name: MultiLangText::new("Iguana+Jellyfish", "Iguana+Jellyfish"),
                room_type: RoomType::RoomIJ,
                sort: 6,
            },
            target_audience: String::new(),
            language: TimetableLanguage {
                lang_of_speaker: "ENGLISH".to_string(),
                is_interpretation_target: true,
            },
            asset: TimetableAsset::default(),
            levels: Vec::new(),
            speakers: Vec::new(),
            description: MultiLangText::new("", ""),
            message: None,
        })
    }
}
