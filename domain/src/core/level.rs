//! Log level value object

/// A well-known log level.
///
/// Writers accept any tag string; these six are the ones that get colors.
/// Tags are matched exactly, so `"info"` is an unknown level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
    Debug,
    Trace,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Info,
        Level::Success,
        Level::Warning,
        Level::Error,
        Level::Debug,
        Level::Trace,
    ];

    /// Tag written between brackets in each log line
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    /// Look up a well-known level by its exact tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == tag)
    }
}

impl AsRef<str> for Level {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
