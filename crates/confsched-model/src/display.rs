//! Display strings for timetable items.
//!
//! Rendering depends on a [`DisplayContext`] (language and timezone) that the
//! caller passes in explicitly. [`TimetableItem::display`] binds an item to a
//! context and returns a [`TimetableItemDisplay`] view; each string on the
//! view is computed on first access and cached for the view's lifetime.
//! Building a new view under a different context renders afresh.

use chrono::{DateTime, Datelike, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use once_cell::sync::OnceCell;

use crate::error::{ConfschedError, Result};
use crate::item::TimetableItem;
use crate::lang::{Lang, MultiLangText};

/// Timezone the conference takes place in.
pub const CONFERENCE_TIMEZONE: Tz = chrono_tz::Asia::Tokyo;

/// Parse an IANA timezone name such as `Asia/Tokyo`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| ConfschedError::InvalidTimezone(name.to_string()))
}

/// Language and timezone a timetable is rendered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayContext {
    pub lang: Lang,
    pub tz: Tz,
}

impl DisplayContext {
    pub fn new(lang: Lang, tz: Tz) -> Self {
        Self { lang, tz }
    }

    /// Build a context from an IANA timezone name.
    ///
    /// # Errors
    /// Returns `ConfschedError::InvalidTimezone` if `tz_name` is not a known zone.
    pub fn parse(lang: Lang, tz_name: &str) -> Result<Self> {
        Ok(Self::new(lang, parse_timezone(tz_name)?))
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::new(Lang::default(), CONFERENCE_TIMEZONE)
    }
}

/// An item bound to a [`DisplayContext`], with memoized display strings.
#[derive(Debug)]
pub struct TimetableItemDisplay<'a> {
    item: &'a TimetableItem,
    context: DisplayContext,
    starts_date: OnceCell<String>,
    starts_time: OnceCell<String>,
    ends_time: OnceCell<String>,
    minutes: OnceCell<String>,
    time_range: OnceCell<String>,
    date_time: OnceCell<String>,
    month_and_day: OnceCell<String>,
}

impl TimetableItem {
    /// Bind this item to `context` for rendering.
    pub fn display(&self, context: DisplayContext) -> TimetableItemDisplay<'_> {
        TimetableItemDisplay {
            item: self,
            context,
            starts_date: OnceCell::new(),
            starts_time: OnceCell::new(),
            ends_time: OnceCell::new(),
            minutes: OnceCell::new(),
            time_range: OnceCell::new(),
            date_time: OnceCell::new(),
            month_and_day: OnceCell::new(),
        }
    }
}

impl<'a> TimetableItemDisplay<'a> {
    pub fn item(&self) -> &'a TimetableItem {
        self.item
    }

    pub fn context(&self) -> DisplayContext {
        self.context
    }

    fn local(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.context.tz)
    }

    /// `HH:MM` of the start, 24-hour, zero-padded.
    pub fn starts_time_string(&self) -> &str {
        self.starts_time
            .get_or_init(|| time_string(self.local(self.item.starts_at())))
    }

    /// `HH:MM` of the end, 24-hour, zero-padded.
    pub fn ends_time_string(&self) -> &str {
        self.ends_time
            .get_or_init(|| time_string(self.local(self.item.ends_at())))
    }

    pub fn starts_local_time(&self) -> NaiveTime {
        self.local(self.item.starts_at()).time()
    }

    pub fn ends_local_time(&self) -> NaiveTime {
        self.local(self.item.ends_at()).time()
    }

    /// `{start} ~ {end}`.
    pub fn formatted_time_string(&self) -> &str {
        self.time_range.get_or_init(|| {
            format!(
                "{} ~ {}",
                self.starts_time_string(),
                self.ends_time_string()
            )
        })
    }

    /// `YYYY.MM.DD / {start} ~ {end} ({minutes}{unit})`.
    pub fn formatted_date_time_string(&self) -> &str {
        self.date_time.get_or_init(|| {
            format!(
                "{} / {} ({})",
                self.starts_date_string(),
                self.formatted_time_string(),
                self.minutes_string()
            )
        })
    }

    /// `MM/DD` of the start, zero-padded.
    pub fn formatted_month_and_day_string(&self) -> &str {
        self.month_and_day.get_or_init(|| {
            let local = self.local(self.item.starts_at());
            format!("{:02}/{:02}", local.month(), local.day())
        })
    }

    /// Web page of the item in the context language. Not cached.
    pub fn url(&self) -> String {
        self.item.url(self.context.lang)
    }

    pub fn supported_lang_string(&self) -> &'a str {
        self.item
            .supported_lang_string(self.context.lang.is_japanese())
    }

    /// Resolve any two-language text of the item in the context language.
    pub fn text<'t>(&self, text: &'t MultiLangText) -> &'t str {
        text.get(self.context.lang)
    }

    fn starts_date_string(&self) -> &str {
        self.starts_date.get_or_init(|| {
            let local = self.local(self.item.starts_at());
            format!("{}.{:02}.{:02}", local.year(), local.month(), local.day())
        })
    }

    fn minutes_string(&self) -> &str {
        self.minutes.get_or_init(|| {
            let unit = MultiLangText::new("分", "min");
            format!(
                "{}{}",
                self.item.duration_minutes(),
                unit.get(self.context.lang)
            )
        })
    }
}

fn time_string(local: DateTime<Tz>) -> String {
    format!("{:02}:{:02}", local.hour(), local.minute())
}
