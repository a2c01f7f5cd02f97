pub mod config;
pub mod paths;

pub use config::{AnalysisConfig, Config, LoggingConfig, ParsingConfig, MAX_UTC_OFFSET_MINUTES};
pub use paths::{PathManager, CONFIG_DIR_ENV};
