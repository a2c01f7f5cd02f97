//! Independent folds from entry sequences into dashboard views.
//!
//! Every builder is pure, accepts an empty slice, and breaks ranking ties by
//! first appearance in the input.

mod breakdown;
mod distribution;
mod heatmap;
mod search;
mod tally;
mod titles;
mod trend;

pub use breakdown::{build_day_totals, build_device_stats, build_genre_stats};
pub use distribution::{
    build_day_distribution, build_day_distribution_smoothed, build_hour_distribution, build_hour_distribution_smoothed,
    smooth_series, DEFAULT_SMOOTHING_WINDOW,
};
pub use heatmap::{bucket_label, build_heatmap, clock_hour, roll_up_heatmap, HeatmapGrid, GRID_DAY_ORDER};
pub use search::{build_search_stats, build_search_stats_with, DEFAULT_TOP_SEARCHES, DEFAULT_WORD_CLOUD_LIMIT, STOP_WORDS};
pub use tally::Tally;
pub use titles::{build_top_titles, DEFAULT_TOP_TITLES};
pub use trend::build_trend;
