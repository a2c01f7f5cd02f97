use crate::aggregate::{
    build_day_distribution_smoothed, build_day_totals, build_device_stats, build_genre_stats, build_heatmap, build_hour_distribution_smoothed,
    build_search_stats_with, build_top_titles, build_trend, DEFAULT_SMOOTHING_WINDOW, DEFAULT_TOP_SEARCHES, DEFAULT_TOP_TITLES,
    DEFAULT_WORD_CLOUD_LIMIT,
};
use crate::insights::create_insights;
use crate::summary::summarize_watching;
use flixlens_models::{
    DayTotal, DeviceStat, DistributionPoint, GenreStat, HeatmapPoint, Insight, SearchEntry, SearchStats, TopTitleStat, TrendPoint,
    ViewingEntry, WatchHighlights,
};
use serde::Serialize;

/// Limits applied when building a full dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub top_titles_limit: usize,
    pub word_cloud_limit: usize,
    pub top_searches_limit: usize,
    pub smoothing_window: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_titles_limit: DEFAULT_TOP_TITLES,
            word_cloud_limit: DEFAULT_WORD_CLOUD_LIMIT,
            top_searches_limit: DEFAULT_TOP_SEARCHES,
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
        }
    }
}

/// Every dashboard view computed from one pair of entry sequences
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub summary: WatchHighlights,
    pub trend: Vec<TrendPoint>,
    pub genres: Vec<GenreStat>,
    pub devices: Vec<DeviceStat>,
    pub top_titles: Vec<TopTitleStat>,
    pub heatmap: Vec<HeatmapPoint>,
    pub day_totals: Vec<DayTotal>,
    pub day_distribution: Vec<DistributionPoint>,
    pub hour_distribution: Vec<DistributionPoint>,
    pub search: SearchStats,
    pub insights: Vec<Insight>,
}

impl DashboardReport {
    pub fn build(viewing: &[ViewingEntry], searches: &[SearchEntry], options: &AnalysisOptions) -> Self {
        let summary = summarize_watching(viewing);
        let genres = build_genre_stats(viewing);
        let devices = build_device_stats(viewing);
        let heatmap = build_heatmap(viewing);
        let search = build_search_stats_with(searches, options.word_cloud_limit, options.top_searches_limit);
        let insights = create_insights(&summary, &genres, &devices, &heatmap, &search);

        Self {
            trend: build_trend(viewing),
            top_titles: build_top_titles(viewing, options.top_titles_limit),
            day_totals: build_day_totals(viewing),
            day_distribution: build_day_distribution_smoothed(viewing, options.smoothing_window),
            hour_distribution: build_hour_distribution_smoothed(viewing, options.smoothing_window),
            summary,
            genres,
            devices,
            heatmap,
            search,
            insights,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.total_sessions == 0 && self.search.total_queries == 0
    }
}
