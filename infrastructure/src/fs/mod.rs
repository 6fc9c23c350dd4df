//! Filesystem adapters.
//!
//! Provides [`FsLogFileStore`], the file sink storage that implements the
//! [`LogFileStore`](twlc_application::LogFileStore) port.

mod log_file_store;

pub use log_file_store::FsLogFileStore;
