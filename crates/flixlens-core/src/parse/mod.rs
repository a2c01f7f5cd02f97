//! Row parser: untyped CSV records into validated viewing and search entries.
//!
//! Parsing never fails. Rows without a usable timestamp, with a zero or
//! unreadable duration, or with an empty query are dropped.

mod duration;
mod timestamp;

pub use duration::parse_duration_minutes;
pub use timestamp::parse_timestamp;

use crate::genre::classify_genre;
use crate::ids::IdGenerator;
use crate::text::normalize;
use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};
use flixlens_models::{DayOfWeek, RawRecord, SearchEntry, ViewingEntry};

pub const START_TIME_COLUMNS: &[&str] = &["Start Time"];
pub const DURATION_COLUMNS: &[&str] = &["Duration"];
pub const TITLE_COLUMNS: &[&str] = &["Title"];
pub const ATTRIBUTE_COLUMNS: &[&str] = &["Attributes", "Supplemental Video Type"];
pub const SUPPLEMENTAL_TYPE_COLUMNS: &[&str] = &["Supplemental Video Type"];
pub const DEVICE_COLUMNS: &[&str] = &["Device Type"];
pub const COUNTRY_COLUMNS: &[&str] = &["Country"];
pub const PROFILE_COLUMNS: &[&str] = &["Profile Name"];

pub const SEARCH_TIMESTAMP_COLUMNS: &[&str] = &["Timestamp", "Utc Timestamp", "Time", "Date"];
// Profile name is the last resort, matching exports that only carry the profile
pub const SEARCH_QUERY_COLUMNS: &[&str] = &[
    "VideoTitle",
    "Search",
    "Search Term",
    "Query",
    "Query Typed",
    "Displayed Name",
    "Profile Name",
];

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_DEVICE: &str = "Unknown Device";
pub const DEFAULT_COUNTRY: &str = "Unknown";
pub const DEFAULT_PROFILE: &str = "Profile";
pub const DEFAULT_SUPPLEMENTAL_TYPE: &str = "Title";

/// Settings that affect how calendar fields are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Offset used for day name, hour, day-of-month and month grouping
    pub offset: FixedOffset,
}

impl ParseOptions {
    /// `None` when the offset is outside ±24h
    pub fn with_utc_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(|offset| Self { offset })
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { offset: Utc.fix() }
    }
}

/// Parse viewing-activity rows, dropping any row that fails validation
pub fn parse_viewing_rows<'a, I, G>(rows: I, options: &ParseOptions, ids: &mut G) -> Vec<ViewingEntry>
where
    I: IntoIterator<Item = &'a RawRecord>,
    G: IdGenerator + ?Sized,
{
    rows.into_iter()
        .filter_map(|row| parse_viewing_row(row, options, ids))
        .collect()
}

pub fn parse_viewing_row<G>(row: &RawRecord, options: &ParseOptions, ids: &mut G) -> Option<ViewingEntry>
where
    G: IdGenerator + ?Sized,
{
    let start_time = row
        .first_trimmed(START_TIME_COLUMNS)
        .and_then(|raw| parse_timestamp(raw, options.offset))?;

    let duration_minutes = row
        .first_of(DURATION_COLUMNS)
        .map(parse_duration_minutes)
        .unwrap_or(0);
    if duration_minutes == 0 {
        return None;
    }

    let title = row.first_trimmed(TITLE_COLUMNS).unwrap_or(DEFAULT_TITLE).to_string();
    let attributes = row.first_of(ATTRIBUTE_COLUMNS).unwrap_or_default().to_string();
    let genre = classify_genre(&title, &attributes);

    Some(ViewingEntry {
        id: ids.next_id(),
        profile_name: text_or(row, PROFILE_COLUMNS, DEFAULT_PROFILE),
        normalized_title: normalize(&title),
        title,
        genre,
        duration_minutes,
        device: text_or(row, DEVICE_COLUMNS, DEFAULT_DEVICE),
        country: text_or(row, COUNTRY_COLUMNS, DEFAULT_COUNTRY),
        supplemental_video_type: text_or(row, SUPPLEMENTAL_TYPE_COLUMNS, DEFAULT_SUPPLEMENTAL_TYPE),
        attributes,
        day_name: day_of(&start_time),
        hour: start_time.hour(),
        start_time,
    })
}

/// Parse search-history rows, dropping any row that fails validation
pub fn parse_search_rows<'a, I, G>(rows: I, options: &ParseOptions, ids: &mut G) -> Vec<SearchEntry>
where
    I: IntoIterator<Item = &'a RawRecord>,
    G: IdGenerator + ?Sized,
{
    rows.into_iter()
        .filter_map(|row| parse_search_row(row, options, ids))
        .collect()
}

pub fn parse_search_row<G>(row: &RawRecord, options: &ParseOptions, ids: &mut G) -> Option<SearchEntry>
where
    G: IdGenerator + ?Sized,
{
    // The first populated timestamp column decides; later candidates are not retried
    let timestamp = row
        .first_of(SEARCH_TIMESTAMP_COLUMNS)
        .and_then(|raw| parse_timestamp(raw, options.offset))?;

    let query = row.first_of(SEARCH_QUERY_COLUMNS)?.trim();
    if query.is_empty() {
        return None;
    }

    Some(SearchEntry {
        id: ids.next_id(),
        profile_name: text_or(row, PROFILE_COLUMNS, DEFAULT_PROFILE),
        query: query.to_string(),
        timestamp,
    })
}

fn text_or(row: &RawRecord, columns: &[&str], default: &str) -> String {
    row.first_trimmed(columns).unwrap_or(default).to_string()
}

fn day_of(time: &DateTime<FixedOffset>) -> DayOfWeek {
    DayOfWeek::from(time.weekday())
}
