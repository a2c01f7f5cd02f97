use serde::{Deserialize, Serialize};
use crate::day::DayOfWeek;
use crate::genre::Genre;

/// Monthly total. Search statistics reuse it with query counts in `minutes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendPoint {
    pub label: String,
    pub minutes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenreStat {
    pub genre: Genre,
    pub entries: u64,
    pub minutes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceStat {
    pub device: String,
    pub count: u64,
    pub minutes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopTitleStat {
    pub title: String,
    pub minutes: u64,
    pub sessions: u64,
    pub genre: Genre,
}

/// Minutes watched on one weekday across the whole history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayTotal {
    pub day: DayOfWeek,
    pub minutes: u64,
}

/// Minutes watched in one (day, hour) cell. Cells without data are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeatmapPoint {
    pub day: DayOfWeek,
    pub hour: u32,
    pub value: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionPoint {
    pub label: String,
    pub value: u64,
    pub smooth: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordCloudToken {
    pub value: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub total_queries: u64,
    pub monthly_counts: Vec<TrendPoint>,
    pub word_cloud: Vec<WordCloudToken>,
    pub top_searches: Vec<WordCloudToken>,
}
