use super::tally::Tally;
use chrono::{DateTime, Datelike, FixedOffset};
use flixlens_models::{TrendPoint, ViewingEntry};

/// Minutes watched per calendar month, oldest month first
pub fn build_trend(entries: &[ViewingEntry]) -> Vec<TrendPoint> {
    let mut by_month: Tally<(i32, u32), TrendPoint> = Tally::new();
    for entry in entries {
        let point = by_month.entry(month_key(&entry.start_time), || TrendPoint {
            label: month_label(&entry.start_time),
            minutes: 0,
        });
        point.minutes += u64::from(entry.duration_minutes);
    }
    into_chronological(by_month)
}

pub(crate) fn month_key(time: &DateTime<FixedOffset>) -> (i32, u32) {
    (time.year(), time.month())
}

/// `"Jan 2024"`
pub(crate) fn month_label(time: &DateTime<FixedOffset>) -> String {
    time.format("%b %Y").to_string()
}

pub(crate) fn into_chronological(tally: Tally<(i32, u32), TrendPoint>) -> Vec<TrendPoint> {
    let mut months = tally.into_vec();
    months.sort_by_key(|(key, _)| *key);
    months.into_iter().map(|(_, point)| point).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::viewing;

    #[test]
    fn test_single_entry_trend() {
        let entries = vec![viewing("2024-01-05T20:00:00Z", "1:30:00", "Test Show S1")];
        let trend = build_trend(&entries);

        assert_eq!(trend, vec![TrendPoint { label: "Jan 2024".to_string(), minutes: 90 }]);
    }

    #[test]
    fn test_months_sorted_ascending_across_years() {
        let entries = vec![
            viewing("2024-02-10 10:00:00", "30", "A"),
            viewing("2023-12-31 23:00:00", "45", "B"),
            viewing("2024-02-11 10:00:00", "15", "C"),
            viewing("2024-01-01 09:00:00", "20", "D"),
        ];
        let trend = build_trend(&entries);

        let labels: Vec<&str> = trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Dec 2023", "Jan 2024", "Feb 2024"]);
        assert_eq!(trend[2].minutes, 45);
    }

    #[test]
    fn test_empty_trend() {
        assert!(build_trend(&[]).is_empty());
    }
}
