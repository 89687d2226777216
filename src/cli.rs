use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logsleuth")]
#[command(about = "Error log analyzer with explanations and suggestions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse and explain an error log
    AnalyzeErrors {
        /// Error log text, a path to a log file, or `-` to read stdin
        log: String,

        /// Log format (auto, json, python, javascript, plain)
        #[arg(short, long)]
        format: Option<String>,

        /// Report format
        #[arg(short = 'o', long = "output-format", value_enum)]
        output_format: Option<OutputFormat>,

        /// Write the report to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Disable colored status messages
        #[arg(long)]
        plain: bool,

        /// Increase log verbosity (-v info, -vv debug, -vvv trace)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// List available commands
    Commands,
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Self::AnalyzeErrors { verbosity, .. } => *verbosity,
            _ => 0,
        }
    }
}

/// Log level filter for a `-v` count.
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
