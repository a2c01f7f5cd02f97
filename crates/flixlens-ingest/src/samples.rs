//! Sample exports bundled with the binary so the dashboard can be explored
//! without personal data.

use crate::error::Result;
use crate::reader::read_records;
use flixlens_models::RawRecord;

pub const VIEWING_ACTIVITY_CSV: &str = include_str!("../samples/viewing-activity.csv");
pub const SEARCH_HISTORY_CSV: &str = include_str!("../samples/search-history.csv");

pub fn viewing_records() -> Result<Vec<RawRecord>> {
    read_records(VIEWING_ACTIVITY_CSV.as_bytes())
}

pub fn search_records() -> Result<Vec<RawRecord>> {
    read_records(SEARCH_HISTORY_CSV.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_tokenize() {
        assert_eq!(viewing_records().unwrap().len(), 24);
        assert_eq!(search_records().unwrap().len(), 14);
    }
}
