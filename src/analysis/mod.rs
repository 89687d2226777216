//! Error log analysis pipeline.
//!
//! `analyze` resolves the log format, unwraps structured JSON payloads,
//! runs the signature registry, extracts stack frames and assembles the
//! suggestions for the report. It is pure and performs no I/O.

use crate::core::{AnalysisResult, FormatHint, LogFormat, MatchedError, StackFrame};
use crate::detection::detect_format;
use crate::extraction::extract_frames;
use crate::signatures::match_all;
use serde_json::Value;
use std::borrow::Cow;

pub const NO_MATCH_SUGGESTION: &str =
    "No known error patterns matched. Review the full log for context.";

pub const GENERIC_SUGGESTIONS: [&str; 3] = [
    "Add logging around the error location for more context",
    "Check if this error is reproducible consistently",
    "Review recent code changes that might have caused this",
];

/// Fields of a JSON log record joined into the text that signatures see.
const JSON_TEXT_FIELDS: [&str; 3] = ["message", "error", "stack"];

/// Analyze a block of log text.
pub fn analyze(text: &str, hint: FormatHint) -> AnalysisResult {
    let format_detected = resolve_format(text, hint);
    log::debug!("Analyzing log as {} (hint: {})", format_detected, hint);

    let match_text = match format_detected {
        LogFormat::Json => unwrap_json_payload(text),
        _ => Cow::Borrowed(text),
    };

    let errors_found = match_all(&match_text);
    // Frames come from the raw text, not the unwrapped payload.
    let stack_frames = extract_frames(text);
    log::debug!(
        "Matched {} signature(s), extracted {} frame(s)",
        errors_found.len(),
        stack_frames.len()
    );

    let suggestions = build_suggestions(&errors_found, &stack_frames);

    AnalysisResult {
        format_detected,
        errors_found,
        stack_frames,
        suggestions,
    }
}

/// An explicit hint is trusted as-is; only `Auto` runs detection.
pub fn resolve_format(text: &str, hint: FormatHint) -> LogFormat {
    match hint {
        FormatHint::Auto => detect_format(text),
        FormatHint::Explicit(format) => format,
    }
}

/// Rebuild the match text from a JSON log record.
///
/// Anything that is not a JSON object is returned unchanged.
pub fn unwrap_json_payload(text: &str) -> Cow<'_, str> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(record)) => {
            let parts: Vec<String> = JSON_TEXT_FIELDS
                .iter()
                .map(|field| field_text(record.get(*field)))
                .collect();
            Cow::Owned(parts.join(" "))
        }
        Ok(_) => {
            log::debug!("JSON payload is not an object; analyzing raw text");
            Cow::Borrowed(text)
        }
        Err(e) => {
            log::debug!("JSON payload did not parse ({}); analyzing raw text", e);
            Cow::Borrowed(text)
        }
    }
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn build_suggestions(errors: &[MatchedError], frames: &[StackFrame]) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(GENERIC_SUGGESTIONS.len() + 2);

    if errors.is_empty() {
        suggestions.push(NO_MATCH_SUGGESTION.to_string());
    }

    if let Some(frame) = frames.first() {
        suggestions.push(origin_suggestion(frame));
    }

    suggestions.extend(GENERIC_SUGGESTIONS.iter().map(|s| s.to_string()));
    suggestions
}

fn origin_suggestion(frame: &StackFrame) -> String {
    format!(
        "Error originated in {}:{} in function {}",
        frame.file, frame.line, frame.function
    )
}

/// Settings that shape an analysis run beyond the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Default format hint when the caller does not give one.
    pub default_hint: FormatHint,
    /// Frames listed in the rendered report.
    pub max_report_frames: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_hint: FormatHint::Auto,
            max_report_frames: crate::output::DEFAULT_MAX_FRAMES,
        }
    }
}

/// Analyzer bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze with an explicit hint, or the configured default.
    pub fn analyze(&self, text: &str, hint: Option<FormatHint>) -> AnalysisResult {
        analyze(text, hint.unwrap_or(self.config.default_hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        let result = analyze("", FormatHint::Auto);
        assert_eq!(result.format_detected, LogFormat::Plain);
        assert!(result.errors_found.is_empty());
        assert!(result.stack_frames.is_empty());
        assert_eq!(result.suggestions.len(), 4);
        assert_eq!(result.suggestions[0], NO_MATCH_SUGGESTION);
        assert_eq!(&result.suggestions[1..], &GENERIC_SUGGESTIONS[..]);
    }

    #[test]
    fn test_python_frame_adds_origin_suggestion() {
        let result = analyze(r#"File "app.py", line 42, in handler"#, FormatHint::Auto);
        assert_eq!(
            result.stack_frames,
            vec![StackFrame::new("app.py", "42", "handler")]
        );
        assert!(result
            .suggestions
            .iter()
            .any(|s| s == "Error originated in app.py:42 in function handler"));
    }

    #[test]
    fn test_origin_suggestion_follows_no_match_sentence() {
        let result = analyze(r#"File "app.py", line 42, in handler"#, FormatHint::Auto);
        assert_eq!(result.suggestions[0], NO_MATCH_SUGGESTION);
        assert_eq!(
            result.suggestions[1],
            "Error originated in app.py:42 in function handler"
        );
        assert_eq!(result.suggestions.len(), 5);
    }

    #[test]
    fn test_json_record_is_unwrapped() {
        let result = analyze(
            r#"{"message": "boom", "error": "ValueError: bad"}"#,
            FormatHint::Auto,
        );
        assert_eq!(result.format_detected, LogFormat::Json);
        assert_eq!(result.errors_found.len(), 1);
        assert!(result.errors_found[0].matched_text.starts_with("ValueError: bad"));
    }

    #[test]
    fn test_unwrap_json_payload_fields() {
        let text = r#"{"error": "KeyError: 'id'", "stack": ["a", 1], "message": null}"#;
        assert_eq!(unwrap_json_payload(text), r#" KeyError: 'id' ["a",1]"#);
    }

    #[test]
    fn test_unwrap_non_object_is_unchanged() {
        assert_eq!(unwrap_json_payload("[1, 2]"), "[1, 2]");
        assert_eq!(unwrap_json_payload("not json"), "not json");
    }

    #[test]
    fn test_explicit_hint_is_trusted() {
        let result = analyze("KeyError: 'x'", FormatHint::Explicit(LogFormat::Python));
        assert_eq!(result.format_detected, LogFormat::Python);
        assert_eq!(result.errors_found.len(), 1);
    }

    #[test]
    fn test_explicit_json_hint_on_plain_text_is_not_fatal() {
        let result = analyze("TimeoutError: read", FormatHint::Explicit(LogFormat::Json));
        assert_eq!(result.format_detected, LogFormat::Json);
        assert_eq!(result.errors_found.len(), 1);
    }

    #[test]
    fn test_frames_use_original_text_for_json() {
        let text = r#"{"message": "x", "trace": "at main (/srv/app.js:7:3)"}"#;
        let result = analyze(text, FormatHint::Auto);
        assert_eq!(result.format_detected, LogFormat::Json);
        assert_eq!(
            result.stack_frames,
            vec![StackFrame::new("/srv/app.js", "7", "main")]
        );
    }

    #[test]
    fn test_matched_errors_leave_only_generic_suggestions() {
        let result = analyze("ECONNREFUSED 127.0.0.1:5432", FormatHint::Auto);
        assert_eq!(result.suggestions, GENERIC_SUGGESTIONS.map(String::from).to_vec());
    }

    #[test]
    fn test_analyzer_uses_configured_default_hint() {
        let analyzer = Analyzer::new(AnalysisConfig {
            default_hint: FormatHint::Explicit(LogFormat::Plain),
            max_report_frames: 1,
        });
        let result = analyzer.analyze(r#"{"message": "x"}"#, None);
        assert_eq!(result.format_detected, LogFormat::Plain);

        let result = analyzer.analyze(r#"{"message": "x"}"#, Some(FormatHint::Auto));
        assert_eq!(result.format_detected, LogFormat::Json);
    }
}
