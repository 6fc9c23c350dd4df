//! Logger construction wired to the local filesystem.

use crate::config::FileLoggerConfig;
use crate::fs::FsLogFileStore;
use std::path::PathBuf;
use tracing::info;
use twlc_application::Logger;
use twlc_domain::{LoggerConfig, LoggerError, Profile};

/// Name of the log directory created beside the executable
pub const DEFAULT_LOG_SUBDIR: &str = "logs";

/// Builds [`Logger`]s that write through [`FsLogFileStore`].
pub struct LoggerFactory;

impl LoggerFactory {
    /// Explicit construction: flags and directory come from `config` verbatim
    pub fn from_config(config: LoggerConfig) -> Result<Logger, LoggerError> {
        Logger::new(config, FsLogFileStore)
    }

    /// Default construction: `logs/` beside the running executable, with the
    /// flags of the named profile
    pub fn default_logger(profile: Profile) -> Result<Logger, LoggerError> {
        let dir = Self::default_log_directory()?;
        info!("Using default log directory {}", dir.display());
        Self::from_config(LoggerConfig::from_profile(profile, dir))
    }

    /// Build from a loaded `[logger]` section, falling back to the default
    /// directory when the file sets none
    pub fn from_file_config(file: &FileLoggerConfig) -> Result<Logger, LoggerError> {
        let default_dir = match &file.log_directory {
            Some(dir) => dir.clone(),
            None => Self::default_log_directory()?,
        };
        Self::from_config(file.to_logger_config(&default_dir))
    }

    /// `<directory of the current executable>/logs`
    pub fn default_log_directory() -> Result<PathBuf, LoggerError> {
        let exe = std::env::current_exe().map_err(LoggerError::ExecutablePath)?;
        let exe_dir = exe.parent().map(PathBuf::from).unwrap_or_default();
        Ok(exe_dir.join(DEFAULT_LOG_SUBDIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use twlc_domain::FilePolicy;

    fn quiet_config(dir: PathBuf) -> LoggerConfig {
        LoggerConfig::new(true, false, false, false, false, false, dir)
    }

    #[test]
    fn test_default_logger_creates_directory_beside_executable() {
        let expected = std::env::current_exe()
            .unwrap()
            .parent()
            .unwrap()
            .join("logs");
        let existed_before = expected.exists();

        let logger = LoggerFactory::default_logger(Profile::Full).unwrap();
        assert_eq!(logger.log_directory(), expected);
        assert!(logger.log_directory().is_dir());

        let config = logger.config();
        assert!(config.save_in_log_file);
        assert!(config.show_in_console);
        assert!(config.color_messages);
        assert!(config.highlight_background);
        assert!(config.highlight_foreground);
        assert!(config.with_timestamp);

        // Leave a pre-existing directory alone
        if !existed_before {
            fs::remove_dir_all(logger.log_directory()).unwrap();
        }
    }

    #[test]
    fn test_from_config_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("test_logs").join("nested");

        let logger = LoggerFactory::from_config(quiet_config(logs.clone())).unwrap();
        assert!(logs.is_dir());
        assert_eq!(logger.log_directory(), logs);
    }

    #[test]
    fn test_write_twice_appends_two_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger =
            LoggerFactory::from_config(quiet_config(dir.path().to_path_buf())).unwrap();

        logger.info("first").unwrap();
        let path = logger.current_log_file_path().unwrap().to_path_buf();
        let size_after_first = fs::metadata(&path).unwrap().len();

        logger.warning("second").unwrap();
        let size_after_second = fs::metadata(&path).unwrap().len();
        assert!(size_after_second > size_after_first);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["[INFO] first", "[WARNING] second"]);
    }

    #[test]
    fn test_daily_file_name_in_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger =
            LoggerFactory::from_config(quiet_config(dir.path().to_path_buf())).unwrap();
        logger.debug("hello").unwrap();

        let path = logger.current_log_file_path().unwrap();
        assert_eq!(path.parent().unwrap(), dir.path());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("twlc_"));
        assert!(name.ends_with(".log"));
        assert_eq!(name.len(), "twlc_YYYYMMDD.log".len());
    }

    #[test]
    fn test_fixed_file_with_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = quiet_config(dir.path().to_path_buf()).with_file_policy(FilePolicy::Fixed);
        config.with_timestamp = true;
        let mut logger = LoggerFactory::from_config(config).unwrap();
        logger.error("stamped").unwrap();

        let contents = fs::read_to_string(dir.path().join("log.txt")).unwrap();
        // "YYYY/MM/DD HH:MM:SS [ERROR] stamped\n"
        assert!(contents.ends_with(" [ERROR] stamped\n"));
        assert_eq!(contents.len(), "YYYY/MM/DD HH:MM:SS [ERROR] stamped\n".len());
        assert_eq!(&contents[4..5], "/");
    }

    #[test]
    fn test_from_file_config_uses_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = FileLoggerConfig {
            profile: Profile::Simple,
            log_directory: Some(dir.path().join("from_file")),
            show_in_console: Some(false),
            ..Default::default()
        };

        let mut logger = LoggerFactory::from_file_config(&file).unwrap();
        logger.success("configured").unwrap();

        let contents = fs::read_to_string(dir.path().join("from_file").join("log.txt")).unwrap();
        assert_eq!(contents, "[SUCCESS] configured\n");
    }
}
