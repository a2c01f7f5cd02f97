//! Entry builders shared by unit tests.

use crate::ids::SequentialIds;
use crate::parse::{parse_search_row, parse_viewing_row, ParseOptions};
use flixlens_models::{RawRecord, SearchEntry, ViewingEntry};

pub fn viewing(start: &str, duration: &str, title: &str) -> ViewingEntry {
    viewing_on(start, duration, title, "TV")
}

pub fn viewing_on(start: &str, duration: &str, title: &str, device: &str) -> ViewingEntry {
    let row = RawRecord::new()
        .with("Start Time", start)
        .with("Duration", duration)
        .with("Title", title)
        .with("Device Type", device);
    parse_viewing_row(&row, &ParseOptions::default(), &mut SequentialIds::new("view"))
        .expect("fixture row should parse")
}

pub fn search(timestamp: &str, query: &str) -> SearchEntry {
    let row = RawRecord::new().with("Timestamp", timestamp).with("Search", query);
    parse_search_row(&row, &ParseOptions::default(), &mut SequentialIds::new("search"))
        .expect("fixture row should parse")
}
