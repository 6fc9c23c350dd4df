//! Logger configuration value objects
//!
//! These are shared by every layer: the infrastructure loader produces a
//! [`LoggerConfig`], the application `Logger` consumes it.

mod logger_config;
mod options;

pub use logger_config::LoggerConfig;
pub use options::{ColorMode, FilePolicy, Profile};
