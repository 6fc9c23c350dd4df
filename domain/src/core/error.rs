//! Domain error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the logger and its rendering helpers.
///
/// Two tiers exist. Infrastructure failures (directory, file, console,
/// executable path) are fatal: callers are expected to stop the process.
/// [`LoggerError::Serialization`] is the only recoverable variant.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Failed to create log directory {}: {source}", .path.display())]
    CreateLogDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create log file {}: {source}", .path.display())]
    CreateLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open log file {}: {source}", .path.display())]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write log file {}: {source}", .path.display())]
    WriteLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to console: {0}")]
    ConsoleWrite(#[source] io::Error),

    #[error("Failed to resolve executable path: {0}")]
    ExecutablePath(#[source] io::Error),

    #[error("Failed to convert value to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LoggerError {
    /// Whether this error belongs to the unrecoverable infrastructure tier
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LoggerError::Serialization(_))
    }
}
