//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every logger field is optional: a missing field keeps the value chosen by
//! the profile.
//!
//! ```toml
//! [logger]
//! profile = "simple"
//! with_timestamp = true
//! log_directory = "/var/log/myapp"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use twlc_domain::{ColorMode, FilePolicy, LoggerConfig, Profile};

/// Root of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub logger: FileLoggerConfig,
}

/// Raw `[logger]` section from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggerConfig {
    /// Base profile the overrides below apply to
    pub profile: Profile,
    pub save_in_log_file: Option<bool>,
    pub show_in_console: Option<bool>,
    pub color_messages: Option<bool>,
    pub color_mode: Option<ColorMode>,
    pub highlight_background: Option<bool>,
    pub highlight_foreground: Option<bool>,
    pub with_timestamp: Option<bool>,
    pub with_location: Option<bool>,
    /// Log directory; defaults to `logs/` beside the executable
    pub log_directory: Option<PathBuf>,
    pub file_policy: Option<FilePolicy>,
}

impl FileLoggerConfig {
    /// Build a [`LoggerConfig`] from the profile plus overrides.
    ///
    /// `default_dir` is used when no `log_directory` is set.
    pub fn to_logger_config(&self, default_dir: &Path) -> LoggerConfig {
        let dir = self
            .log_directory
            .clone()
            .unwrap_or_else(|| default_dir.to_path_buf());
        let base = LoggerConfig::from_profile(self.profile, dir);

        LoggerConfig {
            save_in_log_file: self.save_in_log_file.unwrap_or(base.save_in_log_file),
            show_in_console: self.show_in_console.unwrap_or(base.show_in_console),
            color_messages: self.color_messages.unwrap_or(base.color_messages),
            color_mode: self.color_mode.unwrap_or(base.color_mode),
            highlight_background: self
                .highlight_background
                .unwrap_or(base.highlight_background),
            highlight_foreground: self
                .highlight_foreground
                .unwrap_or(base.highlight_foreground),
            with_timestamp: self.with_timestamp.unwrap_or(base.with_timestamp),
            with_location: self.with_location.unwrap_or(base.with_location),
            file_policy: self.file_policy.unwrap_or(base.file_policy),
            log_directory: base.log_directory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_full_profile() {
        let config: FileConfig = toml::from_str("").unwrap();
        let resolved = config.logger.to_logger_config(Path::new("logs"));
        assert_eq!(resolved, LoggerConfig::from_profile(Profile::Full, "logs"));
    }

    #[test]
    fn test_profile_and_overrides() {
        let toml_str = r#"
[logger]
profile = "simple"
with_timestamp = true
show_in_console = false
file_policy = "daily"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let resolved = config.logger.to_logger_config(Path::new("logs"));

        assert!(resolved.with_timestamp);
        assert!(!resolved.show_in_console);
        assert_eq!(resolved.file_policy, FilePolicy::Daily);
        // Untouched fields keep the simple profile's values
        assert_eq!(resolved.color_mode, ColorMode::Simple);
        assert!(resolved.save_in_log_file);
    }

    #[test]
    fn test_log_directory_override() {
        let toml_str = r#"
[logger]
log_directory = "/tmp/twlc-logs"
color_mode = "extended"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let resolved = config.logger.to_logger_config(Path::new("unused"));
        assert_eq!(resolved.log_directory, PathBuf::from("/tmp/twlc-logs"));
        assert_eq!(resolved.color_mode, ColorMode::Extended);
    }

    #[test]
    fn test_unknown_profile_is_rejected() {
        let result = toml::from_str::<FileConfig>("[logger]\nprofile = \"loud\"\n");
        assert!(result.is_err());
    }
}
