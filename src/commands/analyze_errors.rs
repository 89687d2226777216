//! `analyze-errors`: parse an error log and explain it.

use super::{
    compile_triggers, ArgSpec, Command, CommandArgs, CommandContext, CommandResult, CommandSpec,
};
use crate::analysis::{AnalysisConfig, Analyzer};
use crate::config::LogsleuthConfig;
use crate::core::{Error, FormatHint, Result};
use crate::output::{self, OutputFormat};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

pub const NAME: &str = "analyze-errors";

pub const NO_LOG_MESSAGE: &str = "No log input provided. Use log='...' to provide error text.";

pub struct AnalyzeErrorsCommand {
    spec: CommandSpec,
    analyzer: Analyzer,
    output_format: OutputFormat,
}

impl Default for AnalyzeErrorsCommand {
    fn default() -> Self {
        Self::new(AnalysisConfig::default(), OutputFormat::default())
    }
}

impl AnalyzeErrorsCommand {
    pub fn new(config: AnalysisConfig, output_format: OutputFormat) -> Self {
        Self {
            spec: command_spec(),
            analyzer: Analyzer::new(config),
            output_format,
        }
    }

    pub fn from_config(config: &LogsleuthConfig) -> Self {
        Self::new(config.analysis_config(), config.output_format())
    }

    fn run(&self, args: &CommandArgs, context: Option<&CommandContext>) -> Result<String> {
        let log_arg = args.get("log").map(String::as_str).unwrap_or_default();
        if log_arg.is_empty() {
            return Err(Error::Input(NO_LOG_MESSAGE.to_string()));
        }

        let hint = args
            .get("format")
            .map(|f| f.parse::<FormatHint>())
            .transpose()?;
        let output_format = match args.get("output_format") {
            Some(f) => parse_output_format(f)?,
            None => self.output_format,
        };

        let text = resolve_log_input(log_arg, context)?;

        guard_analysis(|| {
            let result = self.analyzer.analyze(&text, hint);
            output::render(
                &result,
                output_format,
                self.analyzer.config().max_report_frames,
            )
        })
    }
}

impl Command for AnalyzeErrorsCommand {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, args: &CommandArgs, context: Option<&CommandContext>) -> CommandResult {
        match self.run(args, context) {
            Ok(output) => CommandResult::ok(output),
            Err(e) => {
                log::debug!("{} failed: {}", NAME, e);
                CommandResult::failure(e.to_string())
            }
        }
    }
}

fn command_spec() -> CommandSpec {
    CommandSpec {
        name: NAME,
        description: "Parse and explain error logs with suggestions",
        args: vec![
            ArgSpec {
                name: "log",
                description: "Error log text or file path",
                required: true,
                default: None,
            },
            ArgSpec {
                name: "format",
                description: "Log format (auto, json, python, javascript, plain)",
                required: false,
                default: Some("auto"),
            },
            ArgSpec {
                name: "output_format",
                description: "Report format (markdown, json)",
                required: false,
                default: Some("markdown"),
            },
        ],
        self_invokable: true,
        triggers: compile_triggers(&[
            r"error.*occurred",
            r"exception.*thrown",
            r"failed.*with",
            r"traceback",
            r"stack.*trace",
        ]),
    }
}

fn parse_output_format(value: &str) -> Result<OutputFormat> {
    OutputFormat::parse(value).ok_or_else(|| {
        Error::Input(format!(
            "Invalid output format '{}'. Expected one of: markdown, json",
            value
        ))
    })
}

/// Read the log from disk when `log_arg` names an existing file; otherwise
/// the argument is the log text itself.
pub fn resolve_log_input(log_arg: &str, context: Option<&CommandContext>) -> Result<String> {
    let path = Path::new(log_arg);
    let path = match context {
        Some(ctx) => ctx.resolve(path),
        None => path.to_path_buf(),
    };

    if !crate::io::file_exists(&path) {
        return Ok(log_arg.to_string());
    }

    log::debug!("Reading log from {}", path.display());
    std::fs::read_to_string(&path)
        .map_err(|e| Error::io("Failed to read log file", Some(path), e))
}

/// Run the analysis step, turning errors and panics into `Error::Analysis`.
fn guard_analysis<F>(f: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e @ Error::Analysis(_))) => Err(e),
        Ok(Err(e)) => Err(Error::analysis(e)),
        Err(payload) => Err(Error::Analysis(panic_message(&*payload))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::command_args;
    use std::fs;
    use tempfile::TempDir;

    fn run(pairs: &[(&str, &str)]) -> CommandResult {
        AnalyzeErrorsCommand::default().execute(&command_args(pairs.iter().copied()), None)
    }

    #[test]
    fn test_missing_log_is_input_error() {
        let result = run(&[]);
        assert_eq!(result, CommandResult::failure(NO_LOG_MESSAGE));

        let result = run(&[("log", "")]);
        assert_eq!(result.error.as_deref(), Some(NO_LOG_MESSAGE));
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = run(&[("log", "KeyError: 'a'"), ("format", "xml")]);
        assert!(!result.success);
        assert!(result.output.is_empty());
        assert!(result.error.unwrap().starts_with("Invalid format 'xml'"));
    }

    #[test]
    fn test_literal_log_text() {
        let result = run(&[("log", "KeyError: 'user_id'")]);
        assert!(result.success);
        assert!(result.error.is_none());
        assert!(result.output.starts_with("# Error Analysis Report"));
        assert!(result.output.contains("**Log Format:** plain"));
        assert!(result.output.contains("Dictionary key 'user_id' not found"));
    }

    #[test]
    fn test_log_read_from_file_relative_to_context() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("app.log"),
            "Traceback (most recent call last):\n  File \"app.py\", line 42, in handler\nKeyError: 'id'\n",
        )
        .unwrap();

        let ctx = CommandContext::with_working_dir(temp_dir.path());
        let result = AnalyzeErrorsCommand::default()
            .execute(&command_args([("log", "app.log")]), Some(&ctx));

        assert!(result.success, "{:?}", result.error);
        assert!(result.output.contains("**Log Format:** python"));
        assert!(result.output.contains("- `app.py:42` in `handler`"));
    }

    #[test]
    fn test_non_file_path_is_treated_as_text() {
        let result = run(&[("log", "/definitely/not/a/file.log")]);
        assert!(result.success);
        assert!(result.output.contains("No known error patterns matched"));
    }

    #[test]
    fn test_directory_path_is_treated_as_text() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_str().unwrap().to_string();
        let text = resolve_log_input(&dir, None).unwrap();
        assert_eq!(text, dir);
    }

    #[test]
    fn test_unreadable_file_reports_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.log");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let result = run(&[("log", path.to_str().unwrap())]);
        assert!(!result.success);
        assert!(result.output.is_empty());
        assert!(result
            .error
            .unwrap()
            .starts_with("Failed to read log file: "));
    }

    #[test]
    fn test_json_output_format() {
        let result = run(&[("log", "ETIMEDOUT"), ("output_format", "json")]);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(value["format_detected"], "plain");
        assert_eq!(value["errors_found"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_guard_turns_panics_into_analysis_failures() {
        let err = guard_analysis(|| panic!("regex exploded")).unwrap_err();
        assert_eq!(err.to_string(), "Analysis failed: regex exploded");

        let err = guard_analysis(|| Err(Error::Configuration("bad".into()))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Analysis failed: Configuration error: bad"
        );
    }

    #[test]
    fn test_spec_metadata() {
        let command = AnalyzeErrorsCommand::default();
        let spec = command.spec();
        assert_eq!(spec.name, "analyze-errors");
        assert!(spec.arg("log").unwrap().required);
        assert_eq!(spec.arg("format").unwrap().default, Some("auto"));
        assert!(spec.is_triggered_by("An error has occurred in worker 3"));
        assert!(!spec.is_triggered_by("all good"));
    }
}
