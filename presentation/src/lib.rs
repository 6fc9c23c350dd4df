//! Presentation layer for twlc
//!
//! This crate contains CLI definitions and console formatting for
//! configuration diagnostics.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, FilePolicyArg, ProfileArg};
pub use output::console::ConfigReport;
