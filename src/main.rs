//! Brewtagger - Finder tags for managed apps
//!
//! CLI entry point that dispatches to subcommands.

use brewtagger::cli::{Cli, Commands, LogFormat};
use brewtagger::config::{Config, ConfigManager};
use brewtagger::error::BrewtaggerResult;
use brewtagger::tools::Toolbox;
use console::style;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> BrewtaggerResult<()> {
    let mut cli = Cli::parse_args();
    let command = cli.take_command().unwrap_or_else(|e| e.exit());

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await;

    // `tag` logs every decision at info; other commands stay at warn unless -v
    let is_tag_run = matches!(command, Commands::Tag(_));
    let format = cli.log_format.unwrap_or_else(|| match &config {
        Ok(config) => config.general.log_format,
        Err(_) => LogFormat::Text,
    });
    init_logging(cli.verbose, is_tag_run, format);

    let config: Config = config?;
    let tools = Toolbox::system(&config.tools);

    match command {
        Commands::Tag(args) => brewtagger::cli::commands::tag(args, &config, &tools).await,
        Commands::List(args) => brewtagger::cli::commands::list(args, &config, &tools).await,
        Commands::Status => brewtagger::cli::commands::status(&config, &tools).await,
        Commands::Config(args) => {
            brewtagger::cli::commands::config(args, &config, &config_manager).await
        }
        Commands::Launchd(args) => brewtagger::cli::commands::launchd(args),
    }
}

/// Initialize logging: structured lines on stdout
fn init_logging(verbose: u8, is_tag_run: bool, format: LogFormat) {
    let level = match (verbose, is_tag_run) {
        (0, true) => "info",
        (0, false) => "warn",
        (1, _) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::new(format!("brewtagger={level}"));

    match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(std::io::stdout().is_terminal())
            .without_time()
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
    }
}
