use thiserror::Error;

/// Main error type for Luwang
#[derive(Error, Debug)]
pub enum LuwangError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source table read/parse errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Graph document serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using LuwangError
pub type Result<T> = std::result::Result<T, LuwangError>;
