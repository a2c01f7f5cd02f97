use serde::{Deserialize, Serialize};

/// Short narrative observation shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    pub label: String,
    pub highlight: String,
    pub detail: String,
}

impl Insight {
    pub fn new(label: impl Into<String>, highlight: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            highlight: highlight.into(),
            detail: detail.into(),
        }
    }
}
