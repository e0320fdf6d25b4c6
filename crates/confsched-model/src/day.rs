//! The fixed calendar days of DroidKaigi 2024.
//!
//! Every day spans `00:00:00..=23:59:59` in UTC+9, regardless of the zone a
//! timetable is displayed in. An instant outside all days has no day.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConfschedError, Result};

/// 2024-09-11T00:00:00+09:00.
const WORKDAY_START_UNIX: i64 = 1_725_980_400;
const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConferenceDay {
    /// 9/11, workshops. Not shown as a timetable tab.
    Workday,
    ConferenceDay1,
    ConferenceDay2,
}

impl ConferenceDay {
    pub const ALL: [ConferenceDay; 3] = [
        ConferenceDay::Workday,
        ConferenceDay::ConferenceDay1,
        ConferenceDay::ConferenceDay2,
    ];

    fn ordinal(self) -> i64 {
        match self {
            ConferenceDay::Workday => 0,
            ConferenceDay::ConferenceDay1 => 1,
            ConferenceDay::ConferenceDay2 => 2,
        }
    }

    pub fn visible_for_users(self) -> bool {
        !matches!(self, ConferenceDay::Workday)
    }

    pub fn day_of_month(self) -> u32 {
        11 + self.ordinal() as u32
    }

    /// Unpadded `M/D`, e.g. `9/12`.
    pub fn month_and_day(self) -> String {
        format!("9/{}", self.day_of_month())
    }

    /// First instant of the day (midnight UTC+9).
    pub fn start(self) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
            + Duration::seconds(WORKDAY_START_UNIX + self.ordinal() * SECONDS_PER_DAY)
    }

    /// Last whole second of the day (23:59:59 UTC+9), inclusive.
    pub fn end(self) -> DateTime<Utc> {
        self.start() + Duration::seconds(SECONDS_PER_DAY - 1)
    }

    pub fn contains(self, instant: DateTime<Utc>) -> bool {
        self.start() <= instant && instant <= self.end()
    }

    /// The day `instant` falls on, or `None` outside the conference.
    pub fn of(instant: DateTime<Utc>) -> Option<ConferenceDay> {
        Self::ALL.into_iter().find(|day| day.contains(instant))
    }

    pub fn visible_days() -> Vec<ConferenceDay> {
        Self::ALL
            .into_iter()
            .filter(|day| day.visible_for_users())
            .collect()
    }

    /// Position among [`ConferenceDay::visible_days`], `None` for hidden days.
    pub fn tab_index(self) -> Option<usize> {
        Self::visible_days().iter().position(|day| *day == self)
    }

    /// The visible day containing `now`, defaulting to the first conference day.
    pub fn initial_selected_day(now: DateTime<Utc>) -> ConferenceDay {
        Self::visible_days()
            .into_iter()
            .find(|day| day.contains(now))
            .unwrap_or(ConferenceDay::ConferenceDay1)
    }
}

impl fmt::Display for ConferenceDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConferenceDay::Workday => "Workday",
            ConferenceDay::ConferenceDay1 => "Day1",
            ConferenceDay::ConferenceDay2 => "Day2",
        };
        write!(f, "{} ({})", name, self.month_and_day())
    }
}

impl FromStr for ConferenceDay {
    type Err = ConfschedError;

    /// Accepts `workday`, `day1`, `day2`, `M/D` and `YYYY-MM-DD` forms.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let day = match normalized.as_str() {
            "workday" | "9/11" | "09/11" | "2024-09-11" => ConferenceDay::Workday,
            "day1" | "9/12" | "09/12" | "2024-09-12" => ConferenceDay::ConferenceDay1,
            "day2" | "9/13" | "09/13" | "2024-09-13" => ConferenceDay::ConferenceDay2,
            _ => return Err(ConfschedError::UnknownDay(s.to_string())),
        };
        Ok(day)
    }
}
