use thiserror::Error;

/// Application-wide error type for the I/O, configuration and CLI layers
///
/// Sniffing itself is infallible; only obtaining the bytes or presenting the
/// result can fail.
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad command-line input (unmatched patterns, unknown formats)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialisation of results
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Application-wide result type
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<glob::PatternError> for AppError {
    fn from(err: glob::PatternError) -> Self {
        AppError::InvalidInput(format!("Glob pattern error: {}", err))
    }
}

impl From<glob::GlobError> for AppError {
    fn from(err: glob::GlobError) -> Self {
        AppError::Io(err.into_error())
    }
}
