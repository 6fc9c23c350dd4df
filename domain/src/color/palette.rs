//! ANSI SGR palette for log levels

use crate::core::level::Level;

/// SGR reset sequence closing every colored span
pub const RESET: &str = "\x1b[0m";

/// The six ANSI hues used by the log levels.
///
/// Discriminants are the SGR color index: foreground is `30 + n`,
/// background is `40 + n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColor {
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
}

impl AnsiColor {
    /// Foreground escape, e.g. `\x1b[34m` for blue
    pub fn foreground(self) -> String {
        format!("\x1b[3{}m", self as u8)
    }

    /// Background escape with a matching foreground, e.g. `\x1b[44;34m`
    pub fn background(self) -> String {
        format!("\x1b[4{0};3{0}m", self as u8)
    }
}

impl Level {
    pub fn color(&self) -> AnsiColor {
        match self {
            Level::Info => AnsiColor::Blue,
            Level::Success => AnsiColor::Green,
            Level::Warning => AnsiColor::Yellow,
            Level::Error => AnsiColor::Red,
            Level::Debug => AnsiColor::Magenta,
            Level::Trace => AnsiColor::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground_codes() {
        assert_eq!(Level::Info.color().foreground(), "\x1b[34m");
        assert_eq!(Level::Success.color().foreground(), "\x1b[32m");
        assert_eq!(Level::Warning.color().foreground(), "\x1b[33m");
        assert_eq!(Level::Error.color().foreground(), "\x1b[31m");
        assert_eq!(Level::Debug.color().foreground(), "\x1b[35m");
        assert_eq!(Level::Trace.color().foreground(), "\x1b[36m");
    }

    #[test]
    fn test_background_is_same_hue() {
        assert_eq!(AnsiColor::Blue.background(), "\x1b[44;34m");
        assert_eq!(AnsiColor::Cyan.background(), "\x1b[46;36m");
    }
}
