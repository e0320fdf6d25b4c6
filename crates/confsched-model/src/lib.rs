//! # confsched-model
//!
//! Timetable model for the DroidKaigi 2024 conference companion.
//!
//! A [`TimetableItem`] is either a talk session or a special entry (keynote,
//! break, ceremony). Display strings (time ranges, dates, durations, language
//! support, web links) are rendered under an explicit [`DisplayContext`]
//! rather than process-wide locale and timezone state, so the same item can be
//! shown in Japanese in Tokyo and in English in Berlin side by side.
//!
//! ## Quick start
//!
//! ```rust
//! use confsched_model::{DisplayContext, Lang, TimetableItem, CONFERENCE_TIMEZONE};
//!
//! let item = TimetableItem::fake_session();
//! let view = item.display(DisplayContext::new(Lang::English, CONFERENCE_TIMEZONE));
//! assert_eq!(view.formatted_time_string(), "10:30 ~ 10:50");
//! assert_eq!(view.formatted_date_time_string(), "2024.09.12 / 10:30 ~ 10:50 (20min)");
//! ```
//!
//! ## Modules
//!
//! - [`item`] — `TimetableItem` and its attribute types, feed serde mapping
//! - [`display`] — context-bound, memoized display strings
//! - [`day`] — the fixed conference days and day bucketing
//! - [`lang`] — display languages and two-language text
//! - [`timetable`] — feed loading, filtering, favorites
//! - [`overlap`] — detect items running at the same time
//! - [`error`] — Error types

pub mod day;
pub mod display;
pub mod error;
mod fixture;
pub mod item;
pub mod lang;
pub mod overlap;
pub mod timetable;

pub use day::ConferenceDay;
pub use display::{parse_timezone, DisplayContext, TimetableItemDisplay, CONFERENCE_TIMEZONE};
pub use error::{ConfschedError, Result};
pub use item::{
    RoomType, TimetableAsset, TimetableCategory, TimetableEntry, TimetableItem, TimetableItemId,
    TimetableLanguage, TimetableRoom, TimetableSessionType, TimetableSpeaker,
};
pub use lang::{Lang, MultiLangText};
pub use overlap::{find_overlaps, Overlap};
pub use timetable::{Favorites, Timetable, TimetableFilter};
