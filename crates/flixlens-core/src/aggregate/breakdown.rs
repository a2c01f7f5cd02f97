use super::tally::Tally;
use flixlens_models::{DayOfWeek, DayTotal, DeviceStat, Genre, GenreStat, ViewingEntry};

/// Entries and minutes per genre, most watched first
pub fn build_genre_stats(entries: &[ViewingEntry]) -> Vec<GenreStat> {
    let mut by_genre: Tally<Genre, GenreStat> = Tally::new();
    for entry in entries {
        let stat = by_genre.entry(entry.genre, || GenreStat {
            genre: entry.genre,
            entries: 0,
            minutes: 0,
        });
        stat.entries += 1;
        stat.minutes += u64::from(entry.duration_minutes);
    }

    let mut stats: Vec<GenreStat> = by_genre.into_vec().into_iter().map(|(_, stat)| stat).collect();
    stats.sort_by(|a, b| b.minutes.cmp(&a.minutes));
    stats
}

/// Sessions and minutes per device label, most watched first
pub fn build_device_stats(entries: &[ViewingEntry]) -> Vec<DeviceStat> {
    let mut by_device: Tally<&str, DeviceStat> = Tally::new();
    for entry in entries {
        let stat = by_device.entry(entry.device.as_str(), || DeviceStat {
            device: entry.device.clone(),
            count: 0,
            minutes: 0,
        });
        stat.count += 1;
        stat.minutes += u64::from(entry.duration_minutes);
    }

    let mut stats: Vec<DeviceStat> = by_device.into_vec().into_iter().map(|(_, stat)| stat).collect();
    stats.sort_by(|a, b| b.minutes.cmp(&a.minutes));
    stats
}

/// Minutes per weekday, busiest first. Days without viewing are omitted.
pub fn build_day_totals(entries: &[ViewingEntry]) -> Vec<DayTotal> {
    let mut by_day: Tally<DayOfWeek, u64> = Tally::new();
    for entry in entries {
        by_day.add(entry.day_name, u64::from(entry.duration_minutes));
    }

    let mut totals: Vec<DayTotal> = by_day
        .into_vec()
        .into_iter()
        .map(|(day, minutes)| DayTotal { day, minutes })
        .collect();
    totals.sort_by(|a, b| b.minutes.cmp(&a.minutes));
    totals
}
