//! Log line layout shared by the file and console sinks.
//!
//! A line is `<prefix>[LEVEL] message\n`, where the prefix is built by
//! [`line_prefix`] from an optional timestamp and an optional caller location.

use chrono::NaiveDateTime;
use std::panic::Location;

/// Date and time layout of the line stamp, e.g. `2024/03/07 14:05:09`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Call site of a log write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// File name without its directories
    pub fn short_file(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Build the stamp placed before `[LEVEL]`.
///
/// Empty when neither part is requested.
pub fn line_prefix(timestamp: Option<&NaiveDateTime>, location: Option<&SourceLocation>) -> String {
    let mut prefix = String::new();
    if let Some(ts) = timestamp {
        prefix.push_str(&ts.format(TIMESTAMP_FORMAT).to_string());
        prefix.push(' ');
    }
    if let Some(loc) = location {
        prefix.push_str(&format!("{}:{}: ", loc.short_file(), loc.line()));
    }
    prefix
}

pub fn format_line(prefix: &str, level: &str, message: &str) -> String {
    format!("{prefix}[{level}] {message}\n")
}
