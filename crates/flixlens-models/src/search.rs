use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One logged query from a search-history export
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    pub id: String,
    pub profile_name: String,
    pub query: String,
    pub timestamp: DateTime<FixedOffset>,
}
