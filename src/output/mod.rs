//! Report rendering.

pub mod json;
pub mod markdown;

pub use json::format_json;
pub use markdown::{format_report, format_report_with_limit};

use crate::core::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Frames listed in a report unless configured otherwise.
pub const DEFAULT_MAX_FRAMES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    #[serde(alias = "md")]
    #[value(alias = "md")]
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Render `result` in the requested format.
pub fn render(
    result: &AnalysisResult,
    format: OutputFormat,
    max_frames: usize,
) -> crate::core::Result<String> {
    match format {
        OutputFormat::Markdown => Ok(format_report_with_limit(result, max_frames)),
        OutputFormat::Json => Ok(format_json(result)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_md_alias_is_accepted_everywhere() {
        assert_eq!(OutputFormat::parse("md"), Some(OutputFormat::Markdown));
        assert_eq!(
            OutputFormat::from_str("md", false),
            Ok(OutputFormat::Markdown)
        );
        let format: OutputFormat = serde_json::from_str("\"md\"").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert_eq!(OutputFormat::parse("html"), None);
        assert!(OutputFormat::from_str("html", false).is_err());
    }
}
