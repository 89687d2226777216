use crate::core::AnalysisResult;

/// Pretty-printed JSON rendering of an analysis.
pub fn format_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
