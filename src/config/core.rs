use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisConfig;
use crate::core::FormatHint;
use crate::output::{OutputFormat, DEFAULT_MAX_FRAMES};

/// Root configuration structure, read from `.logsleuth.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LogsleuthConfig {
    /// Analysis defaults
    #[serde(default)]
    pub analysis: Option<AnalysisSection>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSection {
    /// Format hint used when none is given on the command line
    #[serde(default = "default_format_hint")]
    pub default_format: String,

    /// Maximum number of stack frames listed in a report
    #[serde(default = "default_max_report_frames")]
    pub max_report_frames: usize,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            default_format: default_format_hint(),
            max_report_frames: default_max_report_frames(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputSection {
    #[serde(default)]
    pub default_format: OutputFormat,
}

pub fn default_format_hint() -> String {
    "auto".to_string()
}

pub fn default_max_report_frames() -> usize {
    DEFAULT_MAX_FRAMES
}

impl LogsleuthConfig {
    /// Analysis settings, falling back to defaults for anything absent or invalid.
    pub fn analysis_config(&self) -> AnalysisConfig {
        let section = self.analysis.clone().unwrap_or_default();
        let default_hint = section
            .default_format
            .parse::<FormatHint>()
            .unwrap_or_else(|e| {
                log::warn!("{}. Using auto detection.", e);
                FormatHint::Auto
            });
        AnalysisConfig {
            default_hint,
            max_report_frames: section.max_report_frames,
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .map(|o| o.default_format)
            .unwrap_or_default()
    }
}
