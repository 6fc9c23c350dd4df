//! Logger configuration entity

use super::options::{ColorMode, FilePolicy, Profile};
use crate::color::ColorStyle;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything a `Logger` needs to decide where and how a line is written.
///
/// Flags are stored verbatim; nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub save_in_log_file: bool,
    pub show_in_console: bool,
    pub color_messages: bool,
    pub color_mode: ColorMode,
    pub highlight_background: bool,
    pub highlight_foreground: bool,
    pub with_timestamp: bool,
    /// Prefix lines with the caller's `file:line`
    pub with_location: bool,
    pub log_directory: PathBuf,
    pub file_policy: FilePolicy,
}

impl LoggerConfig {
    /// Explicit configuration with extended colors and daily files
    pub fn new(
        save_in_log_file: bool,
        show_in_console: bool,
        color_messages: bool,
        highlight_background: bool,
        highlight_foreground: bool,
        with_timestamp: bool,
        log_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            save_in_log_file,
            show_in_console,
            color_messages,
            color_mode: ColorMode::Extended,
            highlight_background,
            highlight_foreground,
            with_timestamp,
            with_location: false,
            log_directory: log_directory.into(),
            file_policy: FilePolicy::Daily,
        }
    }

    /// Configuration for a named profile
    pub fn from_profile(profile: Profile, log_directory: impl Into<PathBuf>) -> Self {
        let full = Self::new(true, true, true, true, true, true, log_directory);
        match profile {
            Profile::Full => full,
            Profile::Simple => Self {
                color_mode: ColorMode::Simple,
                with_timestamp: false,
                file_policy: FilePolicy::Fixed,
                ..full
            },
        }
    }

    pub fn with_file_policy(mut self, policy: FilePolicy) -> Self {
        self.file_policy = policy;
        self
    }

    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    pub fn with_location(mut self, enabled: bool) -> Self {
        self.with_location = enabled;
        self
    }

    /// Log file for entries written on `date`; always inside `log_directory`
    pub fn log_file_path(&self, date: NaiveDate) -> PathBuf {
        self.log_directory.join(self.file_policy.file_name(date))
    }

    pub fn color_style(&self) -> ColorStyle {
        ColorStyle {
            mode: self.color_mode,
            background: self.highlight_background,
            foreground: self.highlight_foreground,
        }
    }
}
