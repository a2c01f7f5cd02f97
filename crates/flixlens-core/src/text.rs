//! Small text and number helpers shared by the aggregators.

/// Lowercase `value` and collapse every run of characters outside `[a-z0-9]`
/// into a single space. Leading and trailing separators are dropped.
pub fn normalize(value: &str) -> String {
    let mut normalized = String::with_capacity(value.len());
    let mut pending_space = false;

    for c in value.trim().chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_space && !normalized.is_empty() {
                normalized.push(' ');
            }
            pending_space = false;
            normalized.push(c);
        } else {
            pending_space = true;
        }
    }

    normalized
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Minutes to hours, rounded to one decimal
pub fn minutes_to_hours(minutes: u64) -> f64 {
    round_to_tenth(minutes as f64 / 60.0)
}
