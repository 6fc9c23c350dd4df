//! Write Log use case
//!
//! [`Logger`] dispatches each entry to the file sink and/or the console sink
//! according to its [`LoggerConfig`].
//!
//! # Flow
//!
//! ```text
//! write(level, message)
//!   ├── prefix = timestamp? + location?
//!   ├── file sink:    store.append_line(<dir>/<policy file>, "<prefix>[LEVEL] message\n")
//!   └── console sink: colorize (console only) → "<prefix>[LEVEL] message\n"
//! ```
//!
//! A `Logger` is not synchronized. Wrap it in a `Mutex` to share it across
//! threads.

use crate::ports::clock::{Clock, SystemClock};
use crate::ports::log_file_store::LogFileStore;
use std::io::{self, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use twlc_domain::{
    Level, LoggerConfig, LoggerError, SourceLocation, colorize, format_line, line_prefix,
};

/// Leveled logger writing to a log file and/or the console.
pub struct Logger {
    config: LoggerConfig,
    store: Box<dyn LogFileStore>,
    console: Box<dyn Write + Send>,
    clock: Box<dyn Clock>,
    current_log_file_path: Option<PathBuf>,
}

impl Logger {
    /// Create a logger, making sure the log directory exists.
    ///
    /// The console defaults to stdout and the clock to local system time.
    pub fn new(
        config: LoggerConfig,
        store: impl LogFileStore + 'static,
    ) -> Result<Self, LoggerError> {
        store.ensure_directory(&config.log_directory)?;
        debug!(dir = %config.log_directory.display(), "Log directory ready");

        Ok(Self {
            config,
            store: Box::new(store),
            console: Box::new(io::stdout()),
            clock: Box::new(SystemClock),
            current_log_file_path: None,
        })
    }

    /// Replace the console writer
    pub fn with_console(mut self, console: impl Write + Send + 'static) -> Self {
        self.console = Box::new(console);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn log_directory(&self) -> &Path {
        &self.config.log_directory
    }

    /// Path used by the most recent file-sink write
    pub fn current_log_file_path(&self) -> Option<&Path> {
        self.current_log_file_path.as_deref()
    }

    /// Path the file sink would write to right now
    pub fn resolve_log_file_path(&self) -> PathBuf {
        self.config.log_file_path(self.clock.now().date())
    }

    pub fn set_highlight_background(&mut self, enabled: bool) {
        self.config.highlight_background = enabled;
    }

    pub fn set_highlight_foreground(&mut self, enabled: bool) {
        self.config.highlight_foreground = enabled;
    }

    /// Write one entry to every enabled sink.
    ///
    /// `level` may be any tag; only the six well-known levels are colored.
    #[track_caller]
    pub fn write(
        &mut self,
        level: impl AsRef<str>,
        message: impl AsRef<str>,
    ) -> Result<(), LoggerError> {
        let location = SourceLocation::from(Location::caller());
        self.write_at(level.as_ref(), message.as_ref(), location)
    }

    fn write_at(
        &mut self,
        level: &str,
        message: &str,
        location: SourceLocation,
    ) -> Result<(), LoggerError> {
        let now = self.clock.now();
        let prefix = line_prefix(
            self.config.with_timestamp.then_some(&now),
            self.config.with_location.then_some(&location),
        );

        if self.config.save_in_log_file {
            let path = self.config.log_file_path(now.date());
            self.current_log_file_path = Some(path.clone());
            self.store
                .append_line(&path, &format_line(&prefix, level, message))?;
            trace!(path = %path.display(), level, "Appended log entry");
        }

        if self.config.show_in_console {
            let (tag, text) = if self.config.color_messages {
                colorize(level, message, self.config.color_style())
            } else {
                (level.to_string(), message.to_string())
            };
            let line = format_line(&prefix, &tag, &text);
            self.console
                .write_all(line.as_bytes())
                .and_then(|()| self.console.flush())
                .map_err(LoggerError::ConsoleWrite)?;
        }

        Ok(())
    }

    #[track_caller]
    pub fn info(&mut self, message: impl AsRef<str>) -> Result<(), LoggerError> {
        self.write(Level::Info, message)
    }

    #[track_caller]
    pub fn success(&mut self, message: impl AsRef<str>) -> Result<(), LoggerError> {
        self.write(Level::Success, message)
    }

    #[track_caller]
    pub fn warning(&mut self, message: impl AsRef<str>) -> Result<(), LoggerError> {
        self.write(Level::Warning, message)
    }

    #[track_caller]
    pub fn error(&mut self, message: impl AsRef<str>) -> Result<(), LoggerError> {
        self.write(Level::Error, message)
    }

    #[track_caller]
    pub fn debug(&mut self, message: impl AsRef<str>) -> Result<(), LoggerError> {
        self.write(Level::Debug, message)
    }

    #[track_caller]
    pub fn trace(&mut self, message: impl AsRef<str>) -> Result<(), LoggerError> {
        self.write(Level::Trace, message)
    }
}
