//! Tests for overlap detection between timetable items.

use chrono::{TimeZone, Utc};
use confsched_model::{find_overlaps, TimetableItem, TimetableItemId};

/// Helper to create an item on 2024-09-12 (UTC hours) with the given id.
fn item(id: &str, start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> TimetableItem {
    let TimetableItem::Session(mut entry) = TimetableItem::fake_session() else {
        unreachable!("fake_session is a session");
    };
    entry.id = TimetableItemId::new(id);
    entry.starts_at = Utc
        .with_ymd_and_hms(2024, 9, 12, start_hour, start_min, 0)
        .unwrap();
    entry.ends_at = Utc
        .with_ymd_and_hms(2024, 9, 12, end_hour, end_min, 0)
        .unwrap();
    TimetableItem::Session(entry)
}

#[test]
fn two_overlapping_items_detected() {
    // A: 01:00-02:00, B: 01:30-02:30 → 30-min overlap
    let a = item("a", 1, 0, 2, 0);
    let b = item("b", 1, 30, 2, 30);

    let overlaps = find_overlaps(&[&a, &b]);

    assert_eq!(overlaps.len(), 1, "should detect exactly one overlap");
    assert_eq!(overlaps[0].overlap_minutes, 30);
    assert_eq!(overlaps[0].first.id().value(), "a");
    assert_eq!(overlaps[0].second.id().value(), "b");
}

#[test]
fn adjacent_items_do_not_overlap() {
    let a = item("a", 1, 0, 2, 0);
    let b = item("b", 2, 0, 3, 0);

    assert!(find_overlaps(&[&a, &b]).is_empty());
}

#[test]
fn contained_item_overlaps_for_its_full_length() {
    // A: 01:00-03:00 contains B: 01:30-02:10 → 40-min overlap
    let a = item("a", 1, 0, 3, 0);
    let b = item("b", 1, 30, 2, 10);

    let overlaps = find_overlaps(&[&b, &a]);

    assert_eq!(overlaps.len(), 1);
    assert_eq!(overlaps[0].overlap_minutes, 40);
    assert_eq!(
        overlaps[0].first.id().value(),
        "a",
        "earlier start is reported first"
    );
}

#[test]
fn every_pair_is_reported_once() {
    let a = item("a", 1, 0, 2, 0);
    let b = item("b", 1, 10, 2, 0);
    let c = item("c", 1, 20, 2, 0);

    let overlaps = find_overlaps(&[&a, &b, &c]);

    assert_eq!(overlaps.len(), 3);
}

#[test]
fn unordered_items_never_overlap() {
    let inverted = item("inverted", 2, 0, 1, 0);
    let normal = item("normal", 0, 30, 2, 30);

    assert!(find_overlaps(&[&inverted, &normal]).is_empty());
}
