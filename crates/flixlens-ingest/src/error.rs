use std::path::PathBuf;
use thiserror::Error;

/// Whole-file failures. Row-level defects never surface here; the row parser
/// drops them silently.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV could not be read: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
