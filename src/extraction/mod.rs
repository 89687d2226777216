//! Stack frame extraction for Python tracebacks and JavaScript stack traces.

use crate::core::StackFrame;
use once_cell::sync::Lazy;
use regex::Regex;

static PYTHON_FRAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"File "(?P<file>[^"]+)", line (?P<line>\d+), in (?P<function>\w+)"#).unwrap()
});

// Column is matched but not kept.
static JAVASCRIPT_FRAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"at (?P<function>\w+).*?\((?P<file>.+?):(?P<line>\d+):\d+\)").unwrap()
});

/// Extract every recognizable frame from `text`.
///
/// Python frames come first, then JavaScript frames, each group in order of
/// appearance. Frames are not interleaved by position.
pub fn extract_frames(text: &str) -> Vec<StackFrame> {
    let mut frames = extract_python_frames(text);
    frames.extend(extract_javascript_frames(text));
    frames
}

pub fn extract_python_frames(text: &str) -> Vec<StackFrame> {
    scan(&PYTHON_FRAME, text)
}

pub fn extract_javascript_frames(text: &str) -> Vec<StackFrame> {
    scan(&JAVASCRIPT_FRAME, text)
}

fn scan(regex: &Regex, text: &str) -> Vec<StackFrame> {
    regex
        .captures_iter(text)
        .map(|caps| {
            let get = |name: &str| caps.name(name).map_or("", |m| m.as_str());
            StackFrame::new(get("file"), get("line"), get("function"))
        })
        .collect()
}
