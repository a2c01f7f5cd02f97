use super::tally::Tally;
use flixlens_models::{DayOfWeek, HeatmapPoint, ViewingEntry};

/// Row order used when the heatmap is laid out as a grid
pub const GRID_DAY_ORDER: [DayOfWeek; 7] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
    DayOfWeek::Sunday,
];

/// Minutes per (day, hour) cell in first-seen order. Empty cells are omitted.
pub fn build_heatmap(entries: &[ViewingEntry]) -> Vec<HeatmapPoint> {
    let mut cells: Tally<(DayOfWeek, u32), u64> = Tally::new();
    for entry in entries {
        cells.add((entry.day_name, entry.hour), u64::from(entry.duration_minutes));
    }

    cells
        .into_vec()
        .into_iter()
        .map(|((day, hour), value)| HeatmapPoint { day, hour, value })
        .collect()
}

/// Dense day × bucket grid rolled up from hourly heatmap cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapGrid {
    pub bucket_hours: u32,
    pub rows: Vec<(DayOfWeek, Vec<u64>)>,
}

impl HeatmapGrid {
    pub fn bucket_starts(&self) -> impl Iterator<Item = u32> + '_ {
        (0..24).step_by(self.bucket_hours as usize)
    }

    pub fn max_value(&self) -> u64 {
        self.rows
            .iter()
            .flat_map(|(_, values)| values.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Fold hourly cells into `bucket_hours`-wide windows, Monday first.
///
/// `bucket_hours` is clamped to 1..=24.
pub fn roll_up_heatmap(points: &[HeatmapPoint], bucket_hours: u32) -> HeatmapGrid {
    let bucket_hours = bucket_hours.clamp(1, 24);
    let buckets = 24_u32.div_ceil(bucket_hours) as usize;

    let mut rows: Vec<(DayOfWeek, Vec<u64>)> = GRID_DAY_ORDER
        .iter()
        .map(|day| (*day, vec![0; buckets]))
        .collect();

    for point in points {
        let bucket = (point.hour.min(23) / bucket_hours) as usize;
        if let Some((_, values)) = rows.iter_mut().find(|(day, _)| *day == point.day) {
            values[bucket] += point.value;
        }
    }

    HeatmapGrid { bucket_hours, rows }
}

/// `"9PM-12AM"` label for a bucket starting at `start`
pub fn bucket_label(start: u32, bucket_hours: u32) -> String {
    format!("{}-{}", clock_hour(start % 24), clock_hour((start + bucket_hours) % 24))
}

/// 12-hour clock label such as `"12AM"` or `"3PM"`
pub fn clock_hour(hour: u32) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}{}", display, period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::viewing;

    #[test]
    fn test_heatmap_cells() {
        // 2024-01-06 is a Saturday
        let entries = vec![
            viewing("2024-01-06 21:10:00", "40", "A"),
            viewing("2024-01-06 21:50:00", "20", "B"),
            viewing("2024-01-08 07:00:00", "15", "C"),
        ];
        let heatmap = build_heatmap(&entries);

        assert_eq!(
            heatmap,
            vec![
                HeatmapPoint { day: DayOfWeek::Saturday, hour: 21, value: 60 },
                HeatmapPoint { day: DayOfWeek::Monday, hour: 7, value: 15 },
            ]
        );
    }

    #[test]
    fn test_roll_up_into_three_hour_buckets() {
        let points = vec![
            HeatmapPoint { day: DayOfWeek::Saturday, hour: 21, value: 60 },
            HeatmapPoint { day: DayOfWeek::Saturday, hour: 23, value: 30 },
            HeatmapPoint { day: DayOfWeek::Monday, hour: 7, value: 15 },
        ];
        let grid = roll_up_heatmap(&points, 3);

        assert_eq!(grid.rows.len(), 7);
        assert_eq!(grid.rows[0], (DayOfWeek::Monday, vec![0, 0, 15, 0, 0, 0, 0, 0]));
        assert_eq!(grid.rows[5], (DayOfWeek::Saturday, vec![0, 0, 0, 0, 0, 0, 0, 90]));
        assert_eq!(grid.max_value(), 90);
        assert_eq!(grid.bucket_starts().collect::<Vec<_>>(), vec![0, 3, 6, 9, 12, 15, 18, 21]);
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(bucket_label(0, 3), "12AM-3AM");
        assert_eq!(bucket_label(21, 3), "9PM-12AM");
        assert_eq!(bucket_label(9, 3), "9AM-12PM");
    }

    #[test]
    fn test_empty_heatmap() {
        assert!(build_heatmap(&[]).is_empty());
        assert_eq!(roll_up_heatmap(&[], 3).max_value(), 0);
    }
}
