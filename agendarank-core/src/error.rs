//! Error types for agendarank.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in agendarank operations.
#[derive(Error, Debug)]
pub enum AgendaRankError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid date '{0}'. Expected YYYY/MM/DD")]
    InvalidDate(String),

    #[error("Failed to open file {} for reading.", path.display())]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Stopped reading {} part-way: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: csv::Error,
    },

    #[error("Failed to open {} for writing: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for agendarank operations.
pub type AgendaRankResult<T> = Result<T, AgendaRankError>;
