//! Port for log file storage.
//!
//! The `Logger` decides *what* line goes to *which* path; implementations of
//! [`LogFileStore`] own the filesystem side.

use std::path::Path;
use twlc_domain::LoggerError;

/// Storage backing the file sink.
///
/// Every call is self-contained: no handle outlives the call that opened it.
pub trait LogFileStore: Send {
    /// Create `dir` and any missing parents. Existing directories are left
    /// untouched.
    fn ensure_directory(&self, dir: &Path) -> Result<(), LoggerError>;

    /// Create `path` if it does not exist, then append `line` to it.
    ///
    /// Existing content is never truncated or rewritten.
    fn append_line(&self, path: &Path, line: &str) -> Result<(), LoggerError>;
}
