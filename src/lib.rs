//! Error log analysis: classify log text against known error signatures,
//! extract stack frames from Python and JavaScript traces, and render a
//! report with explanations and suggestions.

// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod detection;
pub mod extraction;
pub mod formatting;
pub mod io;
pub mod output;
pub mod signatures;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResult, Error, FormatHint, LogFormat, MatchedError, Result, StackFrame,
};

pub use crate::analysis::{analyze, AnalysisConfig, Analyzer};
pub use crate::commands::{
    Command, CommandArgs, CommandContext, CommandRegistry, CommandResult, CommandSpec,
};
pub use crate::detection::detect_format;
pub use crate::extraction::extract_frames;
pub use crate::output::{format_json, format_report, OutputFormat};
pub use crate::signatures::{http_status_explanation, match_all};
