//! Configuration file loading for twlc
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TWLC_`-prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./twlc.toml` or `./.twlc.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/twlc/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileLoggerConfig};
pub use loader::ConfigLoader;
