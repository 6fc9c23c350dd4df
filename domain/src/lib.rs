//! Domain layer for twlc
//!
//! This crate contains the pure parts of the logger: levels, the level to
//! color mapping, configuration value objects, line layout and the debug
//! rendering helpers. It performs no I/O.
//!
//! # Core Concepts
//!
//! - **Level**: a tag such as `INFO` attached to every entry. Six levels are
//!   well known; any other tag is written as-is and never colored.
//! - **Sink**: a destination for entries (log file, console).
//! - **Simple / Extended mode**: the two coloring feature sets.

pub mod color;
pub mod config;
pub mod core;
pub mod entry;
pub mod render;

// Re-export commonly used types
pub use color::{AnsiColor, ColorStyle, RESET, colorize};
pub use config::{ColorMode, FilePolicy, LoggerConfig, Profile};
pub use crate::core::{error::LoggerError, level::Level};
pub use entry::{SourceLocation, TIMESTAMP_FORMAT, format_line, line_prefix};
pub use render::{render_debug, render_json};
