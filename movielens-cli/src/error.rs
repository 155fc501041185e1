use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error (terminal or settings file)
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened
    #[error("Database error: {0}")]
    Database(String),

    /// Settings file could not be read or written
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
