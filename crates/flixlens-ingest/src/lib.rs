//! File ingestion for exported streaming activity.
//!
//! Reads CSV exports into raw records, hands them to the core parsers, and
//! keeps the currently loaded entry sets in a [`DashboardSession`].

pub mod error;
pub mod loader;
pub mod reader;
pub mod samples;
pub mod session;

pub use error::{IngestError, Result};
pub use loader::{load_search_file, load_viewing_file};
pub use reader::{read_records, read_records_from_path};
pub use session::{DashboardSession, ExportKind, UploadStatus};
