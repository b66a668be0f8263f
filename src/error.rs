/// Centralized error types for the holiday countdown
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountdownError {
    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // Date Errors
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // Holiday Data Errors
    #[error("Unsupported holiday file format: {0}")]
    UnsupportedFormat(String),

    #[error("Deserialization failed: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("CSV parsing failed: {0}")]
    CsvError(#[from] csv::Error),

    // File I/O Errors
    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CountdownError>;

impl CountdownError {
    /// Get error code for logging
    pub fn error_code(&self) -> &str {
        match self {
            CountdownError::ConfigError(_) => "CFG_001",
            CountdownError::InvalidParameter(_) => "CFG_002",
            CountdownError::InvalidDate(_) => "DATE_001",
            CountdownError::UnsupportedFormat(_) => "DATA_001",
            CountdownError::DeserializationError(_) => "DATA_002",
            CountdownError::CsvError(_) => "DATA_003",
            CountdownError::FileError(_) => "FILE_001",
            CountdownError::FileNotFound(_) => "FILE_002",
            CountdownError::Other(_) => "GEN_001",
        }
    }
}
