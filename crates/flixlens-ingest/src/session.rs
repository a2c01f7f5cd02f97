use crate::error::Result;
use crate::loader::{load_search_file, load_viewing_file};
use crate::samples;
use flixlens_core::{parse_search_rows, parse_viewing_rows, AnalysisOptions, DashboardReport, ParseOptions, SequentialIds};
use flixlens_models::{SearchEntry, ViewingEntry};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// Which export a status belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportKind {
    Viewing,
    Search,
}

/// Load state of one export file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum UploadStatus {
    /// Required file not loaded yet
    Waiting,
    /// Optional file not loaded
    Optional,
    Processed { kind: ExportKind, rows: usize },
    SampleLoaded { rows: usize },
    Failed { reason: String },
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStatus::Waiting => write!(f, "Waiting"),
            UploadStatus::Optional => write!(f, "Optional"),
            UploadStatus::Processed { kind: ExportKind::Viewing, rows } => write!(f, "{} rows processed", rows),
            UploadStatus::Processed { kind: ExportKind::Search, rows } => write!(f, "{} searches", rows),
            UploadStatus::SampleLoaded { .. } => write!(f, "Sample loaded"),
            UploadStatus::Failed { reason } => write!(f, "Failed: {}", reason),
        }
    }
}

/// Entries currently backing the dashboard.
///
/// Each successful load replaces the matching entry set wholesale. A failed
/// load only updates the status; the previous entries stay in place.
pub struct DashboardSession {
    options: ParseOptions,
    viewing: Vec<ViewingEntry>,
    searches: Vec<SearchEntry>,
    viewing_status: UploadStatus,
    search_status: UploadStatus,
    viewing_ids: SequentialIds,
    search_ids: SequentialIds,
}

impl DashboardSession {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            viewing: Vec::new(),
            searches: Vec::new(),
            viewing_status: UploadStatus::Waiting,
            search_status: UploadStatus::Optional,
            viewing_ids: SequentialIds::new("view"),
            search_ids: SequentialIds::new("search"),
        }
    }

    pub fn load_viewing_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let result = load_viewing_file(path, &self.options, &mut self.viewing_ids);
        self.apply_viewing(result)
    }

    pub fn load_search_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let result = load_search_file(path, &self.options, &mut self.search_ids);
        self.apply_search(result)
    }

    /// Replace both entry sets with the bundled sample exports
    pub fn load_samples(&mut self) -> Result<()> {
        let viewing = samples::viewing_records()
            .map(|records| parse_viewing_rows(&records, &self.options, &mut self.viewing_ids));
        self.store_viewing(viewing, |rows| UploadStatus::SampleLoaded { rows })?;

        let searches = samples::search_records()
            .map(|records| parse_search_rows(&records, &self.options, &mut self.search_ids));
        self.store_search(searches, |rows| UploadStatus::SampleLoaded { rows })?;

        Ok(())
    }

    /// Record the outcome of a viewing load, returning the number of entries kept
    pub fn apply_viewing(&mut self, result: Result<Vec<ViewingEntry>>) -> Result<usize> {
        self.store_viewing(result, |rows| UploadStatus::Processed {
            kind: ExportKind::Viewing,
            rows,
        })
    }

    /// Record the outcome of a search load, returning the number of entries kept
    pub fn apply_search(&mut self, result: Result<Vec<SearchEntry>>) -> Result<usize> {
        self.store_search(result, |rows| UploadStatus::Processed {
            kind: ExportKind::Search,
            rows,
        })
    }

    fn store_viewing<F>(&mut self, result: Result<Vec<ViewingEntry>>, loaded: F) -> Result<usize>
    where
        F: FnOnce(usize) -> UploadStatus,
    {
        match result {
            Ok(entries) => {
                let rows = entries.len();
                self.viewing = entries;
                self.viewing_status = loaded(rows);
                info!(rows, status = %self.viewing_status, "Viewing activity loaded");
                Ok(rows)
            }
            Err(e) => {
                warn!(error = %e, kept = self.viewing.len(), "Viewing activity load failed, keeping previous entries");
                self.viewing_status = UploadStatus::Failed { reason: e.to_string() };
                Err(e)
            }
        }
    }

    fn store_search<F>(&mut self, result: Result<Vec<SearchEntry>>, loaded: F) -> Result<usize>
    where
        F: FnOnce(usize) -> UploadStatus,
    {
        match result {
            Ok(entries) => {
                let rows = entries.len();
                self.searches = entries;
                self.search_status = loaded(rows);
                info!(rows, status = %self.search_status, "Search history loaded");
                Ok(rows)
            }
            Err(e) => {
                warn!(error = %e, kept = self.searches.len(), "Search history load failed, keeping previous entries");
                self.search_status = UploadStatus::Failed { reason: e.to_string() };
                Err(e)
            }
        }
    }

    pub fn report(&self, options: &AnalysisOptions) -> DashboardReport {
        DashboardReport::build(&self.viewing, &self.searches, options)
    }

    pub fn viewing(&self) -> &[ViewingEntry] {
        &self.viewing
    }

    pub fn searches(&self) -> &[SearchEntry] {
        &self.searches
    }

    pub fn viewing_status(&self) -> &UploadStatus {
        &self.viewing_status
    }

    pub fn search_status(&self) -> &UploadStatus {
        &self.search_status
    }
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}
