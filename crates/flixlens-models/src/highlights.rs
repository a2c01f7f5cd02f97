use serde::{Deserialize, Serialize};

/// Placeholder shown when there is nothing to rank
pub const NOT_AVAILABLE: &str = "N/A";

/// Headline metrics for the viewing history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchHighlights {
    pub total_titles: u64,
    pub total_hours: f64,
    pub total_sessions: u64,
    pub average_session_minutes: u64,
    pub peak_day: String,
    pub peak_hour_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_title: Option<TitleHighlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleHighlight {
    pub value: String,
    pub hours: f64,
}

impl Default for WatchHighlights {
    fn default() -> Self {
        Self {
            total_titles: 0,
            total_hours: 0.0,
            total_sessions: 0,
            average_session_minutes: 0,
            peak_day: NOT_AVAILABLE.to_string(),
            peak_hour_range: NOT_AVAILABLE.to_string(),
            top_title: None,
        }
    }
}
