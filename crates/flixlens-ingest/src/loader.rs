use crate::error::Result;
use crate::reader::read_records_from_path;
use flixlens_core::{parse_search_rows, parse_viewing_rows, IdGenerator, ParseOptions};
use flixlens_models::{SearchEntry, ViewingEntry};
use std::path::Path;
use tracing::info;

/// Read a viewing-activity export and parse it into entries
pub fn load_viewing_file<P, G>(path: P, options: &ParseOptions, ids: &mut G) -> Result<Vec<ViewingEntry>>
where
    P: AsRef<Path>,
    G: IdGenerator + ?Sized,
{
    let path = path.as_ref();
    let records = read_records_from_path(path)?;
    let entries = parse_viewing_rows(&records, options, ids);

    info!(
        path = %path.display(),
        rows = records.len(),
        entries = entries.len(),
        dropped = records.len() - entries.len(),
        "Parsed viewing activity"
    );
    Ok(entries)
}

/// Read a search-history export and parse it into entries
pub fn load_search_file<P, G>(path: P, options: &ParseOptions, ids: &mut G) -> Result<Vec<SearchEntry>>
where
    P: AsRef<Path>,
    G: IdGenerator + ?Sized,
{
    let path = path.as_ref();
    let records = read_records_from_path(path)?;
    let entries = parse_search_rows(&records, options, ids);

    info!(
        path = %path.display(),
        rows = records.len(),
        entries = entries.len(),
        dropped = records.len() - entries.len(),
        "Parsed search history"
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flixlens_core::SequentialIds;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_viewing_file_drops_bad_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Profile Name,Start Time,Duration,Title,Device Type").unwrap();
        writeln!(file, "Alex,2024-01-05 20:00:00,1:30:00,Dark: Season 1: Secrets,Smart TV").unwrap();
        writeln!(file, "Alex,,0:45:00,No Start,Smart TV").unwrap();
        writeln!(file, "Alex,2024-01-06 20:00:00,0:00:10,Too Short,Smart TV").unwrap();

        let mut ids = SequentialIds::new("view");
        let entries = load_viewing_file(file.path(), &ParseOptions::default(), &mut ids).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].duration_minutes, 90);
        assert_eq!(entries[0].device, "Smart TV");
    }

    #[test]
    fn test_load_search_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Profile Name,Query Typed,Utc Timestamp").unwrap();
        writeln!(file, "Alex,dark,2024-01-12 20:29:45").unwrap();
        writeln!(file, "Alex,the crown,not a time").unwrap();

        let mut ids = SequentialIds::new("search");
        let entries = load_search_file(file.path(), &ParseOptions::default(), &mut ids).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].query, "dark");
    }
}
