//! Configuration loaded from `.logsleuth.toml`.

mod core;
mod loader;
pub mod validation;

pub use self::core::{AnalysisSection, LogsleuthConfig, OutputSection};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME,
};

/// Default contents written by `logsleuth init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# logsleuth configuration

[analysis]
# auto, json, python, javascript or plain
default_format = "auto"
max_report_frames = 10

[output]
# markdown or json
default_format = "markdown"
"#;
