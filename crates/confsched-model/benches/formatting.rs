use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use confsched_model::{
    DisplayContext, Favorites, Lang, Timetable, TimetableFilter, CONFERENCE_TIMEZONE,
};

fn sample_feed() -> String {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/timetable.json");
    std::fs::read_to_string(path).expect("timetable.json fixture must exist")
}

fn bench_parse(c: &mut Criterion) {
    let json = sample_feed();
    c.bench_function("parse_feed", |b| {
        b.iter(|| Timetable::from_json(black_box(&json)).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let timetable = Timetable::from_json(&sample_feed()).unwrap();
    let context = DisplayContext::new(Lang::English, CONFERENCE_TIMEZONE);
    c.bench_function("render_date_time", |b| {
        b.iter(|| {
            for item in &timetable {
                let view = item.display(black_box(context));
                black_box(view.formatted_date_time_string());
            }
        })
    });
}

fn bench_filter(c: &mut Criterion) {
    let timetable = Timetable::from_json(&sample_feed()).unwrap();
    let filter = TimetableFilter {
        query: Some("compose".to_string()),
        ..Default::default()
    };
    let favorites = Favorites::new();
    c.bench_function("filter_query", |b| {
        b.iter(|| timetable.filter(black_box(&filter), &favorites))
    });
}

criterion_group!(benches, bench_parse, bench_render, bench_filter);
criterion_main!(benches);
