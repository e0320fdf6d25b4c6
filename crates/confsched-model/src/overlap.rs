//! Detect timetable items that run at the same time.
//!
//! Used to warn when two favorited sessions collide. Adjacent items (where one
//! ends exactly when another starts) are NOT overlaps.

use crate::item::TimetableItem;

/// Two items whose time ranges intersect.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlap<'a> {
    /// The item that starts first (ties broken by input order).
    pub first: &'a TimetableItem,
    pub second: &'a TimetableItem,
    pub overlap_minutes: i64,
}

/// Find every pair of overlapping items.
///
/// Two items overlap when `a.start < b.end && b.start < a.end`; the overlap
/// length is `min(a.end, b.end) - max(a.start, b.start)`. Items that do not
/// start before they end never overlap anything.
pub fn find_overlaps<'a>(items: &[&'a TimetableItem]) -> Vec<Overlap<'a>> {
    let mut overlaps = Vec::new();

    for (i, a) in items.iter().enumerate() {
        if !a.entry().is_time_ordered() {
            continue;
        }
        for b in &items[i + 1..] {
            if !b.entry().is_time_ordered() {
                continue;
            }
            if a.starts_at() < b.ends_at() && b.starts_at() < a.ends_at() {
                let overlap_start = a.starts_at().max(b.starts_at());
                let overlap_end = a.ends_at().min(b.ends_at());
                let (first, second) = if b.starts_at() < a.starts_at() {
                    (*b, *a)
                } else {
                    (*a, *b)
                };

                overlaps.push(Overlap {
                    first,
                    second,
                    overlap_minutes: (overlap_end - overlap_start).num_minutes(),
                });
            }
        }
    }

    overlaps
}
