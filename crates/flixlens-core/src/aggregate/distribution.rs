use crate::text::round_to_tenth;
use chrono::Datelike;
use flixlens_models::{DistributionPoint, ViewingEntry};

pub const DEFAULT_SMOOTHING_WINDOW: usize = 5;

/// Minutes per day of month, 31 buckets labelled `"1"`..`"31"`.
/// Empty input yields an empty series.
pub fn build_day_distribution(entries: &[ViewingEntry]) -> Vec<DistributionPoint> {
    build_day_distribution_smoothed(entries, DEFAULT_SMOOTHING_WINDOW)
}

pub fn build_day_distribution_smoothed(entries: &[ViewingEntry], window: usize) -> Vec<DistributionPoint> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut values = vec![0u64; 31];
    for entry in entries {
        values[entry.start_time.day0() as usize] += u64::from(entry.duration_minutes);
    }
    build_distribution(&values, 1, window)
}

/// Minutes per hour of day, 24 buckets labelled `"0"`..`"23"`.
/// Empty input yields an empty series.
pub fn build_hour_distribution(entries: &[ViewingEntry]) -> Vec<DistributionPoint> {
    build_hour_distribution_smoothed(entries, DEFAULT_SMOOTHING_WINDOW)
}

pub fn build_hour_distribution_smoothed(entries: &[ViewingEntry], window: usize) -> Vec<DistributionPoint> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut values = vec![0u64; 24];
    for entry in entries {
        values[entry.hour.min(23) as usize] += u64::from(entry.duration_minutes);
    }
    build_distribution(&values, 0, window)
}

fn build_distribution(values: &[u64], first_label: usize, window: usize) -> Vec<DistributionPoint> {
    let smoothed = smooth_series(values, window);
    values
        .iter()
        .zip(smoothed)
        .enumerate()
        .map(|(index, (&value, smooth))| DistributionPoint {
            label: (index + first_label).to_string(),
            value,
            smooth,
        })
        .collect()
}

/// Centered moving average rounded to one decimal.
///
/// Each point averages itself with up to `window / 2` neighbours per side.
/// Edge points average over the neighbours that exist; there is no padding
/// or wrap-around.
pub fn smooth_series(values: &[u64], window: usize) -> Vec<f64> {
    let half = window / 2;
    (0..values.len())
        .map(|index| {
            let start = index.saturating_sub(half);
            let end = (index + half + 1).min(values.len());
            let neighbours = &values[start..end];
            let sum: u64 = neighbours.iter().sum();
            round_to_tenth(sum as f64 / neighbours.len() as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::viewing;

    #[test]
    fn test_fixed_bucket_counts() {
        let entries = vec![viewing("2024-01-05 20:00:00", "90", "A")];

        let days = build_day_distribution(&entries);
        let hours = build_hour_distribution(&entries);

        assert_eq!(days.len(), 31);
        assert_eq!(hours.len(), 24);
        assert_eq!(days[0].label, "1");
        assert_eq!(days[30].label, "31");
        assert_eq!(hours[0].label, "0");
        assert_eq!(hours[23].label, "23");
        assert_eq!(days[4].value, 90);
        assert_eq!(hours[20].value, 90);
        assert_eq!(hours.iter().map(|p| p.value).sum::<u64>(), 90);
    }

    #[test]
    fn test_empty_distributions() {
        assert!(build_day_distribution(&[]).is_empty());
        assert!(build_hour_distribution(&[]).is_empty());
    }

    #[test]
    fn test_isolated_spike_in_the_middle() {
        let mut values = vec![0u64; 24];
        values[10] = 100;
        let smoothed = smooth_series(&values, 5);

        assert_eq!(smoothed[10], 20.0);
        assert_eq!(smoothed[8], 20.0);
        assert_eq!(smoothed[12], 20.0);
        assert_eq!(smoothed[7], 0.0);
    }

    #[test]
    fn test_spike_at_edges_shrinks_window() {
        let mut values = vec![0u64; 31];
        values[0] = 90;
        values[30] = 40;
        let smoothed = smooth_series(&values, 5);

        assert_eq!(smoothed[0], 30.0); // 3 cells
        assert_eq!(smoothed[1], 22.5); // 4 cells
        assert_eq!(smoothed[30], 13.3); // 40 / 3
    }

    #[test]
    fn test_smoothing_rounds_to_one_decimal() {
        let smoothed = smooth_series(&[1, 0, 0], 5);
        assert_eq!(smoothed, vec![0.3, 0.3, 0.3]);
    }

    #[test]
    fn test_window_of_one_is_identity() {
        assert_eq!(smooth_series(&[3, 7, 1], 1), vec![3.0, 7.0, 1.0]);
    }
}
