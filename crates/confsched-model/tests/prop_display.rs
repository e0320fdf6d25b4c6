//! Property-based tests for display formatting using proptest.
//!
//! These verify invariants that hold for *any* instant pair and zone, not
//! just the fixture times in `display_tests.rs`.

use chrono::{DateTime, Duration, Timelike, Utc};
use confsched_model::{ConferenceDay, DisplayContext, Lang, TimetableItem};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_timezone() -> impl Strategy<Value = chrono_tz::Tz> {
    prop_oneof![
        Just(chrono_tz::UTC),
        Just(chrono_tz::Asia::Tokyo),
        Just(chrono_tz::America::New_York),
        Just(chrono_tz::Europe::London),
        Just(chrono_tz::Asia::Kolkata),
    ]
}

fn arb_lang() -> impl Strategy<Value = Lang> {
    prop_oneof![Just(Lang::Japanese), Just(Lang::English)]
}

/// Instants in 2020-2029.
fn arb_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (1_577_836_800i64..1_893_456_000i64)
        .prop_map(|secs| DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(secs))
}

fn item_between(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> TimetableItem {
    let TimetableItem::Session(mut entry) = TimetableItem::fake_session() else {
        unreachable!("fake_session is a session");
    };
    entry.starts_at = starts_at;
    entry.ends_at = ends_at;
    TimetableItem::Session(entry)
}

proptest! {
    #[test]
    fn time_strings_are_zero_padded_hh_mm(
        starts in arb_instant(),
        minutes in 0i64..600,
        tz in arb_timezone(),
        lang in arb_lang(),
    ) {
        let item = item_between(starts, starts + Duration::minutes(minutes));
        let view = item.display(DisplayContext::new(lang, tz));

        for s in [view.starts_time_string(), view.ends_time_string()] {
            prop_assert_eq!(s.len(), 5);
            prop_assert_eq!(&s[2..3], ":");
            let hour: u32 = s[..2].parse().unwrap();
            let minute: u32 = s[3..].parse().unwrap();
            prop_assert!(hour < 24 && minute < 60);
        }

        let local = starts.with_timezone(&tz);
        prop_assert_eq!(
            view.starts_time_string(),
            format!("{:02}:{:02}", local.hour(), local.minute())
        );
    }

    #[test]
    fn month_and_day_is_always_five_chars(
        starts in arb_instant(),
        tz in arb_timezone(),
    ) {
        let item = item_between(starts, starts + Duration::minutes(20));
        let view = item.display(DisplayContext::new(Lang::English, tz));
        let s = view.formatted_month_and_day_string();

        prop_assert_eq!(s.len(), 5);
        prop_assert_eq!(&s[2..3], "/");
    }

    #[test]
    fn date_time_string_ends_with_localized_minutes(
        starts in arb_instant(),
        minutes in -120i64..600,
        lang in arb_lang(),
    ) {
        let item = item_between(starts, starts + Duration::minutes(minutes));
        let view = item.display(DisplayContext::new(lang, chrono_tz::Asia::Tokyo));
        let unit = match lang {
            Lang::Japanese => "分",
            Lang::English => "min",
        };

        let expected_suffix = format!("({}{})", minutes, unit);
        prop_assert!(view.formatted_date_time_string().ends_with(&expected_suffix));
        let expected_infix = format!(" / {} ", view.formatted_time_string());
        prop_assert!(view.formatted_date_time_string().contains(&expected_infix));
    }

    #[test]
    fn url_always_ends_with_id(id in "[A-Za-z0-9_-]{1,16}") {
        let TimetableItem::Session(mut entry) = TimetableItem::fake_session() else {
            unreachable!("fake_session is a session");
        };
        entry.id = confsched_model::TimetableItemId::new(id.clone());
        let item = TimetableItem::Session(entry);

        let ja = item.url(Lang::Japanese);
        let en = item.url(Lang::English);
        let ja_suffix = format!("/timetable/{}", id);
        prop_assert!(ja.ends_with(&ja_suffix));
        prop_assert_eq!(en.replacen("/en/", "/", 1), ja);
    }

    #[test]
    fn day_is_some_exactly_inside_conference_bounds(instant in arb_instant()) {
        let inside = ConferenceDay::Workday.start() <= instant
            && instant <= ConferenceDay::ConferenceDay2.end();
        prop_assert_eq!(ConferenceDay::of(instant).is_some(), inside);
    }
}
