//! Infrastructure layer for twlc
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod factory;
pub mod fs;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileLoggerConfig};
pub use factory::{DEFAULT_LOG_SUBDIR, LoggerFactory};
pub use fs::FsLogFileStore;
