use anyhow::Result;
use clap::Parser;
use logsleuth::cli::{log_level, Cli, Commands};
use logsleuth::commands::{
    command_args, init_config, AnalyzeErrorsCommand, Command, CommandContext, CommandRegistry,
};
use logsleuth::formatting::{formatter_for, FormattingConfig};
use logsleuth::output::OutputFormat;
use std::path::PathBuf;

const STDIN_MARKER: &str = "-";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::AnalyzeErrors {
            log,
            format,
            output_format,
            output,
            plain,
            verbosity: _,
        } => handle_analyze_errors(log, format, output_format, output, plain),
        Commands::Init { force } => {
            let path = init_config(force)?;
            let formatter = formatter_for(FormattingConfig::from_env());
            println!("{}", formatter.success(&format!("Created {}", path.display())));
            Ok(())
        }
        Commands::Commands => {
            list_commands();
            Ok(())
        }
    }
}

// Verbosity flag sets the baseline; RUST_LOG refines it.
fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level(verbosity));
    builder.parse_default_env();
    let _ = builder.try_init();
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

fn handle_analyze_errors(
    log: String,
    format: Option<String>,
    output_format: Option<OutputFormat>,
    output: Option<PathBuf>,
    plain: bool,
) -> Result<()> {
    let config = logsleuth::config::load_config();
    let command = AnalyzeErrorsCommand::from_config(&config);

    let log_text = if log == STDIN_MARKER {
        logsleuth::io::read_stdin()?
    } else {
        log
    };

    let mut pairs = vec![("log", log_text.as_str())];
    if let Some(format) = format.as_deref() {
        pairs.push(("format", format));
    }
    if let Some(output_format) = output_format {
        pairs.push(("output_format", output_format.as_str()));
    }

    let context = CommandContext {
        working_dir: std::env::current_dir().ok(),
    };
    let result = command.execute(&command_args(pairs), Some(&context));

    if !result.success {
        let formatter = formatter_for(create_formatting_config(plain));
        let message = result.error.unwrap_or_default();
        eprintln!("{} {}", formatter.error("Error:"), message);
        std::process::exit(1);
    }

    match output {
        Some(path) => {
            logsleuth::io::write_file(&path, &result.output)?;
            log::info!("Report written to {}", path.display());
        }
        None => println!("{}", result.output),
    }
    Ok(())
}

fn list_commands() {
    let formatter = formatter_for(FormattingConfig::from_env());
    let registry = CommandRegistry::default();
    for command in registry.iter() {
        let spec = command.spec();
        println!("{}  {}", formatter.bold(spec.name), spec.description);
        for arg in &spec.args {
            let requirement = match (arg.required, arg.default) {
                (true, _) => "required".to_string(),
                (false, Some(default)) => format!("default: {}", default),
                (false, None) => "optional".to_string(),
            };
            println!("    {:<14} {} ({})", arg.name, arg.description, requirement);
        }
    }
}
