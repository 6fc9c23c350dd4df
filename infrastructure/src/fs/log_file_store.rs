//! Append-only log file storage on the local filesystem.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::debug;
use twlc_application::LogFileStore;
use twlc_domain::LoggerError;

/// Log file storage backed by `std::fs`.
///
/// Each append opens the file, writes one line and closes it before
/// returning, on success and on error alike.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLogFileStore;

impl FsLogFileStore {
    /// Create `path` empty unless it already exists.
    fn create_if_absent(path: &Path) -> Result<(), LoggerError> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => {
                debug!("Created log file {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(source) => Err(LoggerError::CreateLogFile {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl LogFileStore for FsLogFileStore {
    fn ensure_directory(&self, dir: &Path) -> Result<(), LoggerError> {
        if dir.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(dir).map_err(|source| LoggerError::CreateLogDir {
            path: dir.to_path_buf(),
            source,
        })?;
        debug!("Created log directory {}", dir.display());
        Ok(())
    }

    fn append_line(&self, path: &Path, line: &str) -> Result<(), LoggerError> {
        Self::create_if_absent(path)?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|source| LoggerError::OpenLogFile {
                path: path.to_path_buf(),
                source,
            })?;

        file.write_all(line.as_bytes())
            .map_err(|source| LoggerError::WriteLogFile {
                path: path.to_path_buf(),
                source,
            })
    }
}
