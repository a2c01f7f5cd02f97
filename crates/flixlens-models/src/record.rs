/// One untyped row from an exported CSV file.
///
/// Header matching is tolerant: case, whitespace and punctuation are ignored,
/// so `"Start Time"`, `"StartTime"` and `"start_time"` all address the same
/// column. Empty cells are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.fields.push((header.into(), value.into()));
    }

    pub fn with(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(header, value);
        self
    }

    /// Value of a single column, if present and non-empty
    pub fn get(&self, column: &str) -> Option<&str> {
        let wanted = header_key(column);
        self.fields
            .iter()
            .find(|(header, value)| !value.is_empty() && header_key(header) == wanted)
            .map(|(_, value)| value.as_str())
    }

    /// First non-empty value among `candidates`, in priority order
    pub fn first_of(&self, candidates: &[&str]) -> Option<&str> {
        candidates.iter().find_map(|column| self.get(column))
    }

    /// First candidate whose value is non-empty after trimming, returned trimmed
    pub fn first_trimmed(&self, candidates: &[&str]) -> Option<&str> {
        candidates
            .iter()
            .filter_map(|column| self.get(column))
            .map(str::trim)
            .find(|value| !value.is_empty())
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(header, _)| header.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

fn header_key(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_variants_match() {
        let record = RawRecord::new().with("StartTime", "2024-01-05");
        assert_eq!(record.get("Start Time"), Some("2024-01-05"));
        assert_eq!(record.get("start_time"), Some("2024-01-05"));
        assert_eq!(record.get("Duration"), None);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let record: RawRecord = vec![("Search", ""), ("Query", "stranger things")].into_iter().collect();
        assert_eq!(record.get("Search"), None);
        assert_eq!(record.first_of(&["Search", "Query"]), Some("stranger things"));
    }

    #[test]
    fn test_first_of_keeps_whitespace_but_first_trimmed_skips_it() {
        let record = RawRecord::new().with("Title", "   ").with("Name", " Dark ");
        assert_eq!(record.first_of(&["Title", "Name"]), Some("   "));
        assert_eq!(record.first_trimmed(&["Title", "Name"]), Some("Dark"));
    }
}
