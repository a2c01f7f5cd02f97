use flixlens_core::{AnalysisOptions, ParseOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest viewer offset accepted, in minutes either side of UTC
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub parsing: ParsingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_top_titles_limit")]
    pub top_titles_limit: usize,
    #[serde(default = "default_word_cloud_limit")]
    pub word_cloud_limit: usize,
    #[serde(default = "default_top_searches_limit")]
    pub top_searches_limit: usize,
    /// Points averaged per smoothed distribution value, must be odd
    #[serde(default = "default_smoothing_window")]
    pub smoothing_window: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsingConfig {
    /// Viewer offset from UTC used for calendar fields and naive timestamps
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_top_titles_limit() -> usize {
    AnalysisOptions::default().top_titles_limit
}

fn default_word_cloud_limit() -> usize {
    AnalysisOptions::default().word_cloud_limit
}

fn default_top_searches_limit() -> usize {
    AnalysisOptions::default().top_searches_limit
}

fn default_smoothing_window() -> usize {
    AnalysisOptions::default().smoothing_window
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_titles_limit: default_top_titles_limit(),
            word_cloud_limit: default_word_cloud_limit(),
            top_searches_limit: default_top_searches_limit(),
            smoothing_window: default_smoothing_window(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file when it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let analysis = &self.analysis;
        for (name, value) in [
            ("top_titles_limit", analysis.top_titles_limit),
            ("word_cloud_limit", analysis.word_cloud_limit),
            ("top_searches_limit", analysis.top_searches_limit),
            ("smoothing_window", analysis.smoothing_window),
        ] {
            if value == 0 {
                return Err(anyhow::anyhow!("analysis.{} must be greater than zero", name));
            }
        }

        if analysis.smoothing_window % 2 == 0 {
            return Err(anyhow::anyhow!(
                "analysis.smoothing_window must be odd, got {}",
                analysis.smoothing_window
            ));
        }

        if self.parsing.utc_offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
            return Err(anyhow::anyhow!(
                "parsing.utc_offset_minutes must be within ±{} minutes, got {}",
                MAX_UTC_OFFSET_MINUTES,
                self.parsing.utc_offset_minutes
            ));
        }

        Ok(())
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            top_titles_limit: self.analysis.top_titles_limit,
            word_cloud_limit: self.analysis.word_cloud_limit,
            top_searches_limit: self.analysis.top_searches_limit,
            smoothing_window: self.analysis.smoothing_window,
        }
    }

    pub fn parse_options(&self) -> anyhow::Result<ParseOptions> {
        ParseOptions::with_utc_offset_minutes(self.parsing.utc_offset_minutes).ok_or_else(|| {
            anyhow::anyhow!("Invalid UTC offset: {} minutes", self.parsing.utc_offset_minutes)
        })
    }
}
