use crate::aggregate::{clock_hour, Tally};
use crate::text::minutes_to_hours;
use flixlens_models::{DayOfWeek, TitleHighlight, ViewingEntry, WatchHighlights};

/// Width of the peak hour window in hours
pub const PEAK_WINDOW_HOURS: u32 = 3;

/// Headline metrics for a viewing history.
///
/// Rankings pick the first encountered key on ties. An empty history returns
/// zeros, `"N/A"` for peak day and hour, and no top title.
pub fn summarize_watching(entries: &[ViewingEntry]) -> WatchHighlights {
    if entries.is_empty() {
        return WatchHighlights::default();
    }

    let mut total_minutes = 0u64;
    // normalized title -> (minutes, latest display title)
    let mut titles: Tally<&str, (u64, &str)> = Tally::new();
    let mut days: Tally<DayOfWeek, u64> = Tally::new();
    let mut hours: Tally<u32, u64> = Tally::new();

    for entry in entries {
        let minutes = u64::from(entry.duration_minutes);
        total_minutes += minutes;

        let title = titles.entry(entry.normalized_title.as_str(), || (0, entry.title.as_str()));
        title.0 += minutes;
        title.1 = entry.title.as_str();

        days.add(entry.day_name, minutes);
        hours.add(entry.hour, minutes);
    }

    let total_sessions = entries.len() as u64;
    let peak_day = days
        .leader_by(|minutes| *minutes)
        .map(|(day, _)| day.to_string())
        .unwrap_or_else(|| flixlens_models::NOT_AVAILABLE.to_string());
    let peak_hour_range = hours
        .leader_by(|minutes| *minutes)
        .map(|(hour, _)| hour_range(*hour))
        .unwrap_or_else(|| flixlens_models::NOT_AVAILABLE.to_string());
    let top_title = titles.leader_by(|(minutes, _)| *minutes).map(|(_, (minutes, title))| TitleHighlight {
        value: title.to_string(),
        hours: minutes_to_hours(*minutes),
    });

    WatchHighlights {
        total_titles: titles.len() as u64,
        total_hours: minutes_to_hours(total_minutes),
        total_sessions,
        average_session_minutes: (total_minutes as f64 / total_sessions as f64).round() as u64,
        peak_day,
        peak_hour_range,
        top_title,
    }
}

/// `"9PM - 12AM"` style window starting at `hour`, wrapping past midnight
pub fn hour_range(hour: u32) -> String {
    let start = hour % 24;
    let end = (hour + PEAK_WINDOW_HOURS) % 24;
    format!("{} - {}", clock_hour(start), clock_hour(end))
}
