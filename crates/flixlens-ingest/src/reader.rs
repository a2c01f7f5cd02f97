use crate::error::{IngestError, Result};
use csv::ReaderBuilder;
use flixlens_models::RawRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Tokenize CSV text with a header row into raw records.
///
/// Blank lines are skipped. A row whose field count differs from the header,
/// or text that is not valid UTF-8, fails the whole file.
pub fn read_records<R: Read>(input: R) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(clean_header).collect();
    if headers.is_empty() {
        warn!("CSV input has no header row");
        return Ok(Vec::new());
    }
    debug!(columns = ?headers, "Available CSV columns");

    let mut records: Vec<RawRecord> = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(
            headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| (header.clone(), value.to_string()))
                .collect(),
        );
    }

    debug!(rows = records.len(), "Read CSV rows");
    Ok(records)
}

pub fn read_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file)
}

fn clean_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_records() {
        let csv = "Profile Name,Start Time,Duration,Title\n\
                   Alex,2024-01-05 20:00:00,1:30:00,\"Love, Rosie\"\n\
                   \n\
                   Sam,2024-01-06 09:00:00,0:25:00,Bluey\n";
        let records = read_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("Title"), Some("Love, Rosie"));
        assert_eq!(records[1].get("Profile Name"), Some("Sam"));
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let csv = "\u{feff}Start Time,Duration\n2024-01-05 20:00:00,45\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].headers().next(), Some("Start Time"));
    }

    #[test]
    fn test_ragged_rows_fail_the_file() {
        let csv = "Start Time,Duration,Title\n2024-01-05 20:00:00,45\n";
        let result = read_records(csv.as_bytes());
        assert!(matches!(result, Err(IngestError::Csv(_))));
    }

    #[test]
    fn test_invalid_utf8_fails_the_file() {
        let csv: &[u8] = b"Start Time,Title\n2024-01-05 20:00:00,Am\xe9lie\n";
        let result = read_records(csv);
        assert!(matches!(result, Err(IngestError::Csv(_))));
    }

    #[test]
    fn test_empty_input_has_no_records() {
        assert!(read_records("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_header_only() {
        assert!(read_records("Start Time,Duration\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_read_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Search,Timestamp").unwrap();
        writeln!(file, "dark,2024-01-12 20:29:45").unwrap();

        let records = read_records_from_path(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("search"), Some("dark"));
    }

    #[test]
    fn test_missing_file() {
        let result = read_records_from_path("/definitely/not/here.csv");
        match result {
            Err(IngestError::Open { path, .. }) => assert!(path.ends_with("here.csv")),
            other => panic!("expected open error, got {:?}", other),
        }
    }
}
