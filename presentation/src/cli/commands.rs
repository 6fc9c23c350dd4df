//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use twlc_domain::{FilePolicy, Profile};
use twlc_infrastructure::FileLoggerConfig;

/// Named default profile
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    /// Timestamps, extended colors, daily files
    Full,
    /// No timestamps, simple colors, a single log.txt
    Simple,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Full => Profile::Full,
            ProfileArg::Simple => Profile::Simple,
        }
    }
}

/// Log file naming
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FilePolicyArg {
    /// Always log.txt
    Fixed,
    /// twlc_YYYYMMDD.log
    Daily,
}

impl From<FilePolicyArg> for FilePolicy {
    fn from(arg: FilePolicyArg) -> Self {
        match arg {
            FilePolicyArg::Fixed => FilePolicy::Fixed,
            FilePolicyArg::Daily => FilePolicy::Daily,
        }
    }
}

/// CLI arguments for twlc
#[derive(Parser, Debug)]
#[command(name = "twlc")]
#[command(author, version, about = "Leveled console and daily file logging")]
#[command(long_about = r#"
twlc writes leveled messages to the console and to a log file.

Each MESSAGE becomes one entry. Without messages, lines are read from stdin.
INFO, SUCCESS, WARNING, ERROR, DEBUG and TRACE are colored on the console;
any other level is written as-is.

Configuration files are loaded from (in priority order):
1. TWLC_* environment variables (e.g. TWLC_LOGGER__WITH_TIMESTAMP=false)
2. --config <path>     Explicit config file
3. ./twlc.toml         Project-level config
4. ~/.config/twlc/config.toml   Global config

Example:
  twlc "Service started"
  twlc -l ERROR --log-dir /tmp/logs "Disk full"
  tail -f app.out | twlc -l TRACE --no-color
"#)]
pub struct Cli {
    /// Messages to write, one entry each
    pub messages: Vec<String>,

    /// Level tag for the entries
    #[arg(short, long, value_name = "LEVEL", default_value = "INFO")]
    pub level: String,

    /// Base profile the other options override
    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,

    /// Directory holding the log file
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log file naming
    #[arg(long, value_enum)]
    pub file_policy: Option<FilePolicyArg>,

    /// Do not write to the log file
    #[arg(long)]
    pub no_file: bool,

    /// Do not print to the console
    #[arg(long)]
    pub no_console: bool,

    /// Disable console colors
    #[arg(long)]
    pub no_color: bool,

    /// Omit the date and time prefix
    #[arg(long)]
    pub no_timestamp: bool,

    /// Prefix entries with the source location of the write
    #[arg(long)]
    pub location: bool,

    /// Verbosity of twlc's own diagnostics on stderr (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the resolved settings, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Apply command-line options on top of a loaded `[logger]` section
    pub fn apply_overrides(&self, logger: &mut FileLoggerConfig) {
        if let Some(profile) = self.profile {
            logger.profile = profile.into();
        }
        if let Some(dir) = &self.log_dir {
            logger.log_directory = Some(dir.clone());
        }
        if let Some(policy) = self.file_policy {
            logger.file_policy = Some(policy.into());
        }
        if self.no_file {
            logger.save_in_log_file = Some(false);
        }
        if self.no_console {
            logger.show_in_console = Some(false);
        }
        if self.no_color {
            logger.color_messages = Some(false);
        }
        if self.no_timestamp {
            logger.with_timestamp = Some(false);
        }
        if self.location {
            logger.with_location = Some(true);
        }
    }
}
