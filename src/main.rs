//! Slang Dictionary - Main entrypoint.
//!
//! Loads configuration, initializes the logging system and runs the
//! interactive dictionary session on the terminal.

use clap::{Parser, Subcommand};
use slang_dict_lib::config::{ConfigLoader, LogConfig, SlangConfig, ENV_PREFIX};
use slang_dict_lib::data_structures::PrefixIndex;
use slang_dict_lib::error::{
    DictError, DictResult, ErrorContext, ErrorReporter, TracingErrorReporter,
};
use slang_dict_lib::session::Session;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the slang dictionary.
#[derive(Parser, Debug)]
#[clap(name = "Slang Dictionary", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start an interactive dictionary session
    Run,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so they stay out of the menu on stdout.
fn init_logging(log: &LogConfig) -> DictResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| DictError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> DictResult<()> {
    let args = <Args as clap::Parser>::parse();

    // Logging is configured too, so load before anything else
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = config_loader.load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    let reporter = TracingErrorReporter;

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            let config = match loaded {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Configuration error: {}", e);
                    process::exit(1);
                }
            };

            info!(
                title = %config.display.title,
                format = ?config.display.format,
                "Starting slang dictionary"
            );

            // Lives for the whole session and is dropped with it
            let mut index = PrefixIndex::new();

            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = Session::new(stdin.lock(), stdout.lock(), &config);

            if let Err(error) = session.run(&mut index) {
                let context = ErrorContext::new(error, "session")
                    .with_details(format!("{} terms in dictionary", index.len()));
                reporter.report(&context);
                process::exit(1);
            }

            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            match loaded {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = SlangConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(DictError::Io)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| DictError::Custom(format!("Failed to serialize config: {e}")))?;

            std::fs::write(&output, toml).map_err(DictError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
