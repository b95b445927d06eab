pub mod detect;
pub mod signatures;

use crate::errors::{AppError, AppResult};

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per result
    #[default]
    Text,
    /// JSON array for programmatic use
    Json,
}

impl OutputFormat {
    /// Parse a format name from the CLI or config
    pub fn parse(format_str: &str) -> AppResult<Self> {
        match format_str.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::InvalidInput(format!(
                "Unknown output format '{}': expected 'text' or 'json'",
                other
            ))),
        }
    }
}
