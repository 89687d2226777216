pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use errors::{Error, Result};

/// Shape of the log text handed to the analyzer.
///
/// `Python` and `JavaScript` are the two traceback dialects the frame
/// extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Python,
    #[serde(rename = "javascript")]
    JavaScript,
    Plain,
}

impl LogFormat {
    pub const ALL: [LogFormat; 4] = [
        LogFormat::Json,
        LogFormat::Python,
        LogFormat::JavaScript,
        LogFormat::Plain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Plain => "plain",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied format: either let the detector decide or force a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatHint {
    #[default]
    Auto,
    Explicit(LogFormat),
}

impl FormatHint {
    pub const VALID_VALUES: &'static str = "auto, json, python, javascript, plain";
}

impl FromStr for FormatHint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        LogFormat::parse(s).map(Self::Explicit).ok_or_else(|| {
            Error::Input(format!(
                "Invalid format '{}'. Expected one of: {}",
                s,
                Self::VALID_VALUES
            ))
        })
    }
}

impl fmt::Display for FormatHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Explicit(format) => format.fmt(f),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackFrame {
    pub file: String,
    /// Decimal digits exactly as they appeared in the trace.
    pub line: String,
    pub function: String,
}

impl StackFrame {
    pub fn new(
        file: impl Into<String>,
        line: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line: line.into(),
            function: function.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedError {
    /// Pattern text of the signature that fired.
    pub pattern: String,
    pub matched_text: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub format_detected: LogFormat,
    pub errors_found: Vec<MatchedError>,
    pub stack_frames: Vec<StackFrame>,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse_is_case_insensitive() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(" python "), Some(LogFormat::Python));
        assert_eq!(LogFormat::parse("JavaScript"), Some(LogFormat::JavaScript));
        assert_eq!(LogFormat::parse("yaml"), None);
    }

    #[test]
    fn test_format_hint_from_str() {
        assert_eq!("auto".parse::<FormatHint>().unwrap(), FormatHint::Auto);
        assert_eq!(
            "plain".parse::<FormatHint>().unwrap(),
            FormatHint::Explicit(LogFormat::Plain)
        );
        let err = "xml".parse::<FormatHint>().unwrap_err();
        assert!(err.to_string().contains("Invalid format 'xml'"));
    }

    #[test]
    fn test_log_format_serializes_as_tag() {
        let json = serde_json::to_string(&LogFormat::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");
    }
}
