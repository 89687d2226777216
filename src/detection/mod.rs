//! Log format detection.
//!
//! Detection is an ordered chain of probes; the first probe that recognizes
//! the text decides the format, and text nothing recognizes is `Plain`.

use crate::core::LogFormat;
use once_cell::sync::Lazy;
use regex::Regex;

pub const PYTHON_TRACEBACK_HEADER: &str = "Traceback (most recent call last):";

static JAVASCRIPT_FRAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"at \w+.*?\(.+?:\d+:\d+\)").unwrap());

type Probe = fn(&str) -> Option<LogFormat>;

const PROBES: &[Probe] = &[probe_json, probe_python, probe_javascript];

/// Classify `text` into a [`LogFormat`].
pub fn detect_format(text: &str) -> LogFormat {
    PROBES
        .iter()
        .find_map(|probe| probe(text))
        .unwrap_or(LogFormat::Plain)
}

/// Whether `text` is one complete JSON document.
pub fn is_json_document(text: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(_) => true,
        Err(e) => {
            log::trace!("Not a JSON document: {}", e);
            false
        }
    }
}

fn probe_json(text: &str) -> Option<LogFormat> {
    is_json_document(text).then_some(LogFormat::Json)
}

fn probe_python(text: &str) -> Option<LogFormat> {
    text.contains(PYTHON_TRACEBACK_HEADER)
        .then_some(LogFormat::Python)
}

fn probe_javascript(text: &str) -> Option<LogFormat> {
    JAVASCRIPT_FRAME
        .is_match(text)
        .then_some(LogFormat::JavaScript)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_json_object() {
        assert_eq!(detect_format(r#"{"message": "boom"}"#), LogFormat::Json);
    }

    #[test]
    fn test_json_scalars_are_documents() {
        assert_eq!(detect_format("42"), LogFormat::Json);
        assert_eq!(detect_format(r#""just a string""#), LogFormat::Json);
    }

    #[test]
    fn test_malformed_json_falls_through() {
        let text = "{\"message\": \"boom\"\nTraceback (most recent call last):";
        assert_eq!(detect_format(text), LogFormat::Python);
    }

    #[test]
    fn test_detects_python_traceback() {
        let text = "Traceback (most recent call last):\n  File \"app.py\", line 1, in <module>\nValueError: x";
        assert_eq!(detect_format(text), LogFormat::Python);
    }

    #[test]
    fn test_python_header_wins_over_javascript_frames() {
        let text = "Traceback (most recent call last):\n    at main (/srv/index.js:10:5)";
        assert_eq!(detect_format(text), LogFormat::Python);
    }

    #[test]
    fn test_detects_javascript_stack() {
        let text = "TypeError: x is undefined\n    at handler (/srv/app.js:12:7)";
        assert_eq!(detect_format(text), LogFormat::JavaScript);
    }

    #[test]
    fn test_plain_fallback() {
        assert_eq!(detect_format(""), LogFormat::Plain);
        assert_eq!(detect_format("disk almost full"), LogFormat::Plain);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let text = "    at run (/srv/worker.js:3:1)";
        assert_eq!(detect_format(text), detect_format(text));
    }
}
