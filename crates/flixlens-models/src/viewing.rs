use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use crate::day::DayOfWeek;
use crate::genre::Genre;

/// One watched session from a viewing-activity export
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewingEntry {
    pub id: String,
    pub profile_name: String,
    pub title: String,
    pub normalized_title: String, // Grouping key only, never displayed
    pub genre: Genre,
    pub start_time: DateTime<FixedOffset>, // Expressed in the viewer's offset
    pub duration_minutes: u32,
    pub device: String,
    pub country: String,
    pub supplemental_video_type: String,
    pub attributes: String,
    pub day_name: DayOfWeek,
    pub hour: u32,
}
