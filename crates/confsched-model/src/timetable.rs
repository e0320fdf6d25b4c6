//! A whole conference timetable and the queries the app runs over it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::day::ConferenceDay;
use crate::error::Result;
use crate::item::{
    RoomType, TimetableCategory, TimetableItem, TimetableItemId, TimetableRoom, TimetableSessionType,
};
use crate::overlap::{self, Overlap};

/// Ids the user has bookmarked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(BTreeSet<TimetableItemId>);

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &TimetableItemId) -> bool {
        self.0.contains(id)
    }

    /// Returns `true` if the id was not already a favorite.
    pub fn add(&mut self, id: TimetableItemId) -> bool {
        self.0.insert(id)
    }

    /// Returns `true` if the id was a favorite.
    pub fn remove(&mut self, id: &TimetableItemId) -> bool {
        self.0.remove(id)
    }

    /// Flip the favorite state of `id`, returning the new state.
    pub fn toggle(&mut self, id: TimetableItemId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimetableItemId> {
        self.0.iter()
    }
}

impl FromIterator<TimetableItemId> for Favorites {
    fn from_iter<I: IntoIterator<Item = TimetableItemId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Search and filter criteria. Empty lists and `None` match everything;
/// all set criteria must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimetableFilter {
    pub days: Vec<ConferenceDay>,
    pub category_ids: Vec<i32>,
    pub room_types: Vec<RoomType>,
    pub session_types: Vec<TimetableSessionType>,
    /// Raw `lang_of_speaker` codes.
    pub languages: Vec<String>,
    pub favorites_only: bool,
    /// Case-insensitive; matched against titles, descriptions and speaker names.
    pub query: Option<String>,
}

impl TimetableFilter {
    fn accepts(
        &self,
        item: &TimetableItem,
        favorites: &Favorites,
        query_lower: Option<&str>,
    ) -> bool {
        let entry = item.entry();

        if !self.days.is_empty() && !item.day().is_some_and(|day| self.days.contains(&day)) {
            return false;
        }
        if !self.category_ids.is_empty() && !self.category_ids.contains(&entry.category.id) {
            return false;
        }
        if !self.room_types.is_empty() && !self.room_types.contains(&entry.room.room_type) {
            return false;
        }
        if !self.session_types.is_empty() && !self.session_types.contains(&entry.session_type) {
            return false;
        }
        if !self.languages.is_empty()
            && !self.languages.contains(&entry.language.lang_of_speaker)
        {
            return false;
        }
        if self.favorites_only && !favorites.contains(&entry.id) {
            return false;
        }
        match query_lower {
            Some(needle) => item.matches_query(needle),
            None => true,
        }
    }
}

/// Timetable items ordered by start time, then room column, then id.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    items: Vec<TimetableItem>,
}

impl Timetable {
    pub fn from_items(mut items: Vec<TimetableItem>) -> Self {
        items.sort_by(|a, b| {
            (a.starts_at(), a.room().sort, a.id()).cmp(&(b.starts_at(), b.room().sort, b.id()))
        });
        Self { items }
    }

    /// Parse a schedule feed: either a bare array of items or an object with
    /// a `timetable` array.
    ///
    /// # Errors
    /// Returns `ConfschedError::Json` if the input is not valid JSON or an
    /// item does not match the schema.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let items: Vec<TimetableItem> = match value {
            Value::Object(mut map) => match map.remove("timetable") {
                Some(inner) => serde_json::from_value(inner)?,
                None => serde_json::from_value(Value::Object(map))?,
            },
            other => serde_json::from_value(other)?,
        };
        Ok(Self::from_items(items))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimetableItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[TimetableItem] {
        &self.items
    }

    pub fn get(&self, id: &TimetableItemId) -> Option<&TimetableItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn day_items(&self, day: ConferenceDay) -> Vec<&TimetableItem> {
        self.items
            .iter()
            .filter(|item| item.day() == Some(day))
            .collect()
    }

    /// Distinct categories in timetable order.
    pub fn categories(&self) -> Vec<&TimetableCategory> {
        let mut seen = BTreeSet::new();
        self.items
            .iter()
            .map(|item| &item.entry().category)
            .filter(|category| seen.insert(category.id))
            .collect()
    }

    /// Distinct rooms in column order.
    pub fn rooms(&self) -> Vec<&TimetableRoom> {
        let mut seen = BTreeSet::new();
        let mut rooms: Vec<&TimetableRoom> = self
            .items
            .iter()
            .map(|item| item.room())
            .filter(|room| seen.insert(room.id))
            .collect();
        rooms.sort_by_key(|room| (room.sort, room.id));
        rooms
    }

    /// Distinct speaker language codes in timetable order.
    pub fn languages(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.items
            .iter()
            .map(|item| item.language().lang_of_speaker.as_str())
            .filter(|lang| seen.insert(*lang))
            .collect()
    }

    /// A new timetable with only the items `filter` accepts.
    pub fn filter(&self, filter: &TimetableFilter, favorites: &Favorites) -> Timetable {
        let query_lower = filter
            .query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
            .map(str::to_lowercase);
        let items = self
            .items
            .iter()
            .filter(|item| filter.accepts(item, favorites, query_lower.as_deref()))
            .cloned()
            .collect();
        Timetable { items }
    }

    /// Favorited items that run at the same time as another favorite.
    pub fn find_overlapping(&self, favorites: &Favorites) -> Vec<Overlap<'_>> {
        let favorited: Vec<&TimetableItem> = self
            .items
            .iter()
            .filter(|item| favorites.contains(item.id()))
            .collect();
        overlap::find_overlaps(&favorited)
    }
}

impl<'a> IntoIterator for &'a Timetable {
    type Item = &'a TimetableItem;
    type IntoIter = std::slice::Iter<'a, TimetableItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
