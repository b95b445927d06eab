use crate::cli::commands::OutputFormat;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from sniffer.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `text` or `json`
    pub format: String,
    /// Leading bytes shown as hex alongside each result (0 disables)
    pub preview_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                format: "text".to_string(),
                preview_bytes: 16,
            },
            logging: LoggingConfig {
                filter: "error".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from sniffer.toml (if present) and environment variables
    ///
    /// Environment variables take precedence over file configuration, e.g.
    /// `SNIFFER_OUTPUT__FORMAT=json`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name("sniffer").required(false))
    }

    /// Load configuration from an explicit file, still honouring environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        let config = Config::builder()
            .set_default("output.format", defaults.output.format)?
            .set_default("output.preview_bytes", defaults.output.preview_bytes as i64)?
            .set_default("logging.filter", defaults.logging.filter)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("SNIFFER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        // Same rules as the --format flag
        OutputFormat::parse(&app_config.output.format)
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(app_config)
    }

    /// Get config values for CLI argument defaults, falling back to built-ins
    pub fn get_defaults() -> Self {
        Self::load().unwrap_or_default()
    }
}
