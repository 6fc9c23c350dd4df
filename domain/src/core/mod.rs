//! Core domain concepts shared across all subdomains.
//!
//! - [`level::Level`]: the six well-known log levels
//! - [`error::LoggerError`]: fatal and recoverable logger errors

pub mod error;
pub mod level;
