//! Analytics over exported streaming activity.
//!
//! Rows flow one way: [`parse`] turns raw records into entries, the
//! [`aggregate`] builders and [`summarize_watching`] fold entries into views,
//! and [`create_insights`] composes those views into short observations.
//! Everything here is a pure function of its inputs.

pub mod aggregate;
pub mod genre;
pub mod ids;
pub mod insights;
pub mod parse;
pub mod report;
pub mod summary;
pub mod text;

#[cfg(test)]
mod fixtures;

pub use aggregate::{
    build_day_distribution, build_day_totals, build_device_stats, build_genre_stats, build_heatmap, build_hour_distribution,
    build_search_stats, build_top_titles, build_trend, roll_up_heatmap, smooth_series,
};
pub use genre::classify_genre;
pub use ids::{IdGenerator, SequentialIds};
pub use insights::create_insights;
pub use parse::{parse_search_rows, parse_viewing_rows, ParseOptions};
pub use report::{AnalysisOptions, DashboardReport};
pub use summary::summarize_watching;
