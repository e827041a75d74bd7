use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Enumeration of all possible errors that can occur while shifting a subtitle file
#[derive(Debug, Error)]
pub enum ShiftError {
    #[error("Path to input file does not exist: {}", .path.display())]
    InputNotFound { path: PathBuf },
    #[error("Timestamp error: {0}")]
    Timestamp(#[from] TimestampError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A matched timestamp range that could not be parsed or shifted
#[derive(Debug, Error)]
#[error("{}{message}", line_prefix(.line))]
pub struct TimestampError {
    pub message: String,
    /// 1-based line number in the input, when known
    pub line: Option<usize>,
}

impl TimestampError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
        }
    }

    /// Attach the input line number the error was raised on.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

fn line_prefix(line: &Option<usize>) -> String {
    line.map(|n| format!("line {}: ", n)).unwrap_or_default()
}

/// Run configuration that cannot be honored, detected before any file is opened
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Type alias for Result with ShiftError
pub type ShiftResult<T> = Result<T, ShiftError>;
