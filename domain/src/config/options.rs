//! Logger option value objects

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coloring feature set for console output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Only the message is colored
    Simple,
    /// Tag and message are gated by the highlight flags
    #[default]
    Extended,
}

/// How the log file inside the log directory is named
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilePolicy {
    /// Always `log.txt`
    Fixed,
    /// `twlc_YYYYMMDD.log`, rolling over at local midnight
    #[default]
    Daily,
}

impl FilePolicy {
    pub const FIXED_FILE_NAME: &'static str = "log.txt";

    /// File name to use on the given local date
    pub fn file_name(&self, date: NaiveDate) -> String {
        match self {
            FilePolicy::Fixed => Self::FIXED_FILE_NAME.to_string(),
            FilePolicy::Daily => format!("twlc_{}.log", date.format("%Y%m%d")),
        }
    }
}

/// Named default configuration profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Everything on: timestamps, extended colors, daily files
    #[default]
    Full,
    /// No timestamps, simple colors, a single `log.txt`
    Simple,
}
