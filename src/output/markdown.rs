use super::DEFAULT_MAX_FRAMES;
use crate::core::{AnalysisResult, MatchedError, StackFrame};

/// Render the report with the default frame limit.
pub fn format_report(result: &AnalysisResult) -> String {
    format_report_with_limit(result, DEFAULT_MAX_FRAMES)
}

/// Render the report, listing at most `max_frames` stack frames.
///
/// Sections without content are left out entirely.
pub fn format_report_with_limit(result: &AnalysisResult, max_frames: usize) -> String {
    let mut lines = vec![
        "# Error Analysis Report".to_string(),
        String::new(),
        format!("**Log Format:** {}", result.format_detected),
        String::new(),
    ];

    if !result.errors_found.is_empty() {
        lines.extend(errors_section(&result.errors_found));
    }

    if !result.stack_frames.is_empty() {
        lines.extend(stack_section(&result.stack_frames, max_frames));
    }

    if !result.suggestions.is_empty() {
        lines.extend(suggestions_section(&result.suggestions));
    }

    lines.join("\n")
}

fn errors_section(errors: &[MatchedError]) -> Vec<String> {
    let mut lines = vec!["## Errors Identified".to_string(), String::new()];
    for (i, error) in errors.iter().enumerate() {
        lines.push(format!("### Error {}", i + 1));
        lines.push(format!("**Match:** `{}`", error.matched_text));
        lines.push(format!("**Explanation:** {}", error.explanation));
        lines.push(String::new());
    }
    lines
}

fn stack_section(frames: &[StackFrame], max_frames: usize) -> Vec<String> {
    let mut lines = vec!["## Stack Trace".to_string(), String::new()];
    lines.extend(
        frames
            .iter()
            .take(max_frames)
            .map(|frame| format!("- `{}:{}` in `{}`", frame.file, frame.line, frame.function)),
    );
    lines.push(String::new());
    lines
}

fn suggestions_section(suggestions: &[String]) -> Vec<String> {
    let mut lines = vec!["## Suggestions".to_string(), String::new()];
    lines.extend(suggestions.iter().map(|s| format!("- {s}")));
    lines
}
