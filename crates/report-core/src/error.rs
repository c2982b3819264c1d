use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the report analyzer.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report folder is missing or could not be enumerated.
    #[error("Failed to read report folder {path}: {source}")]
    FolderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report file does not decode as UTF-8 text.
    #[error("File {path} is not valid UTF-8")]
    Encoding { path: PathBuf },

    /// A matched report line carries a non-numeric amount field.
    #[error("Failed to parse amount from line: {line}")]
    AmountParse { line: String },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the analyzer crates.
pub type Result<T> = std::result::Result<T, ReportError>;
