use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use clap::{Parser, Subcommand};

pub mod commands;

/// MIME content sniffer
#[derive(Parser)]
#[command(name = "content-sniffer")]
#[command(about = "Detect the MIME type of files from their leading bytes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Detect the content type of files or standard input
    Detect(commands::detect::DetectCommand),
    /// List the signature table in precedence order
    Signatures(commands::signatures::SignaturesCommand),
}

pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()
        .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;

    // Uses RUST_LOG if set, otherwise the configured logging.filter
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .try_init();

    match cli.command {
        Commands::Detect(command) => command.run(&config),
        Commands::Signatures(command) => command.run(&config),
    }
}
