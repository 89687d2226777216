//! Command invocation contract.
//!
//! Every toolkit command takes a map of named string arguments plus an
//! optional execution context and answers with a [`CommandResult`]. Failures
//! are reported in the result, never raised past [`Command::execute`].
//!
//! Available commands:
//! - **analyze-errors**: explain an error log and suggest next steps
//!
//! `init` is a CLI-only helper and does not implement [`Command`].

pub mod analyze_errors;
pub mod init;

pub use analyze_errors::AnalyzeErrorsCommand;
pub use init::init_config;

use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Named arguments passed to a command.
pub type CommandArgs = BTreeMap<String, String>;

/// Build [`CommandArgs`] from string pairs.
pub fn command_args<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> CommandArgs {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandContext {
    /// Base directory for relative paths in arguments.
    pub working_dir: Option<PathBuf>,
}

impl CommandContext {
    pub fn with_working_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }

    /// Resolve `path` against the working directory when it is relative.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.working_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub success: bool,
    pub output: String,
    pub error: Option<String>,
}

impl CommandResult {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: None,
        }
    }

    /// Failed invocation; output is always empty.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
}

/// Case-insensitive pattern that suggests a command is relevant to some text.
///
/// Compared and serialized by its pattern text.
#[derive(Debug, Clone)]
pub struct Trigger {
    pattern: &'static str,
    regex: Regex,
}

impl Trigger {
    pub fn new(pattern: &'static str) -> std::result::Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern, regex })
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Trigger {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for Trigger {}

impl Serialize for Trigger {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.pattern)
    }
}

/// Compile trigger patterns, skipping (and logging) any that fail.
pub fn compile_triggers(patterns: &[&'static str]) -> Vec<Trigger> {
    patterns
        .iter()
        .filter_map(|pattern| match Trigger::new(pattern) {
            Ok(trigger) => Some(trigger),
            Err(e) => {
                log::warn!("Ignoring invalid trigger {:?}: {}", pattern, e);
                None
            }
        })
        .collect()
}

/// Static description of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub args: Vec<ArgSpec>,
    /// Whether the command may be offered automatically when a trigger matches.
    pub self_invokable: bool,
    pub triggers: Vec<Trigger>,
}

impl CommandSpec {
    /// True if any trigger matches `text`.
    pub fn is_triggered_by(&self, text: &str) -> bool {
        self.triggers.iter().any(|trigger| trigger.is_match(text))
    }

    pub fn arg(&self, name: &str) -> Option<&ArgSpec> {
        self.args.iter().find(|arg| arg.name == name)
    }
}

pub trait Command: Send + Sync {
    fn spec(&self) -> &CommandSpec;

    fn execute(&self, args: &CommandArgs, context: Option<&CommandContext>) -> CommandResult;

    fn name(&self) -> &'static str {
        self.spec().name
    }
}

/// Ordered set of commands, looked up by name.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(AnalyzeErrorsCommand::default()));
        registry
    }
}

impl CommandRegistry {
    pub fn empty() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command, replacing any existing command with the same name.
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.retain(|c| c.name() != command.name());
        self.commands.push(command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    pub fn execute(
        &self,
        name: &str,
        args: &CommandArgs,
        context: Option<&CommandContext>,
    ) -> CommandResult {
        match self.get(name) {
            Some(command) => command.execute(args, context),
            None => CommandResult::failure(format!("Unknown command: {}", name)),
        }
    }

    /// Self-invokable commands whose triggers match `text`.
    pub fn triggered_by<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a dyn Command> {
        self.iter()
            .filter(move |c| c.spec().self_invokable && c.spec().is_triggered_by(text))
    }
}
