//! Plain-text rendering of timetable items for terminal output.

use std::fmt::Write;

use confsched_model::{DisplayContext, Favorites, Overlap, TimetableItem};

/// `{MM/DD} {start} ~ {end} [{room}] {title}`, with a star for favorites.
pub fn list_line(item: &TimetableItem, context: DisplayContext, favorites: &Favorites) -> String {
    let view = item.display(context);
    let mut line = format!(
        "{} {} [{}] {}",
        view.formatted_month_and_day_string(),
        view.formatted_time_string(),
        view.text(&item.room().name),
        view.text(item.title()),
    );
    if favorites.contains(item.id()) {
        line.push_str(" ★");
    }
    line
}

/// Multi-line detail block, newline-terminated.
pub fn detail(item: &TimetableItem, context: DisplayContext) -> String {
    let view = item.display(context);
    let entry = item.entry();
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", view.text(&entry.title));
    let _ = writeln!(out, "{}", view.formatted_date_time_string());
    let _ = writeln!(out, "Room:     {}", view.text(&entry.room.name));
    let _ = writeln!(out, "Category: {}", view.text(&entry.category.title));
    let _ = writeln!(out, "Language: {}", view.supported_lang_string());
    if !entry.levels.is_empty() {
        let _ = writeln!(out, "Levels:   {}", entry.levels.join(", "));
    }
    if !entry.speakers.is_empty() {
        let names: Vec<&str> = entry.speakers.iter().map(|s| s.name.as_str()).collect();
        let _ = writeln!(out, "Speakers: {}", names.join(", "));
    }
    if let Some(slide_url) = &entry.asset.slide_url {
        let _ = writeln!(out, "Slides:   {}", slide_url);
    }
    if let Some(video_url) = &entry.asset.video_url {
        let _ = writeln!(out, "Video:    {}", video_url);
    }
    let _ = writeln!(out, "URL:      {}", view.url());
    if let Some(message) = &entry.message {
        let _ = writeln!(out, "Notice:   {}", view.text(message));
    }

    out
}

/// `{MM/DD} {start} ~ {end} {title} / {start} ~ {end} {title} ({n} min)`.
pub fn overlap_line(overlap: &Overlap<'_>, context: DisplayContext) -> String {
    let first = overlap.first.display(context);
    let second = overlap.second.display(context);
    format!(
        "{} {} {} / {} {} ({} min)",
        first.formatted_month_and_day_string(),
        first.formatted_time_string(),
        first.text(overlap.first.title()),
        second.formatted_time_string(),
        second.text(overlap.second.title()),
        overlap.overlap_minutes,
    )
}
