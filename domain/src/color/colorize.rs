//! Level/message colorizing for console output.

use super::palette::RESET;
use crate::config::ColorMode;
use crate::core::level::Level;

/// Which parts of a console line get wrapped in escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorStyle {
    pub mode: ColorMode,
    /// Extended mode only: wrap the level tag
    pub background: bool,
    /// Extended mode only: wrap the message
    pub foreground: bool,
}

impl ColorStyle {
    /// Simple mode: message colored, tag plain
    pub fn simple() -> Self {
        Self {
            mode: ColorMode::Simple,
            background: false,
            foreground: true,
        }
    }

    pub fn extended(background: bool, foreground: bool) -> Self {
        Self {
            mode: ColorMode::Extended,
            background,
            foreground,
        }
    }

    fn wraps_tag(&self) -> bool {
        match self.mode {
            ColorMode::Simple => false,
            ColorMode::Extended => self.background,
        }
    }

    fn wraps_message(&self) -> bool {
        match self.mode {
            ColorMode::Simple => true,
            ColorMode::Extended => self.foreground,
        }
    }
}

impl Default for ColorStyle {
    fn default() -> Self {
        Self::extended(true, true)
    }
}

fn wrap(open: &str, text: &str) -> String {
    format!("{open}{text}{RESET}")
}

/// Colorize a `(level, message)` pair.
///
/// Unknown levels come back unchanged, as does any part the style leaves
/// plain. Every escape added is closed with [`RESET`].
pub fn colorize(level: &str, message: &str, style: ColorStyle) -> (String, String) {
    let Some(known) = Level::from_tag(level) else {
        return (level.to_string(), message.to_string());
    };
    let color = known.color();

    let tag = if style.wraps_tag() {
        wrap(&color.background(), level)
    } else {
        level.to_string()
    };

    let text = if style.wraps_message() {
        wrap(&color.foreground(), message)
    } else {
        message.to_string()
    };

    (tag, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MSG: &str = "Test message";

    #[test]
    fn test_message_wrapped_for_every_level() {
        let cases = [
            (Level::Info, "\x1b[34mTest message\x1b[0m"),
            (Level::Success, "\x1b[32mTest message\x1b[0m"),
            (Level::Warning, "\x1b[33mTest message\x1b[0m"),
            (Level::Error, "\x1b[31mTest message\x1b[0m"),
            (Level::Debug, "\x1b[35mTest message\x1b[0m"),
            (Level::Trace, "\x1b[36mTest message\x1b[0m"),
        ];

        for (level, expected) in cases {
            let (_, message) = colorize(level.as_str(), MSG, ColorStyle::default());
            assert_eq!(message, expected);
            let inner = message
                .strip_prefix(&level.color().foreground())
                .and_then(|s| s.strip_suffix(RESET));
            assert_eq!(inner, Some(MSG));
        }
    }

    #[test]
    fn test_unknown_level_passes_through() {
        for style in [ColorStyle::default(), ColorStyle::simple()] {
            let (level, message) = colorize("Unknown", MSG, style);
            assert_eq!(level, "Unknown");
            assert_eq!(message, MSG);
        }
    }

    #[test]
    fn test_simple_mode_leaves_tag_plain() {
        let (level, message) = colorize("ERROR", MSG, ColorStyle::simple());
        assert_eq!(level, "ERROR");
        assert_eq!(message, "\x1b[31mTest message\x1b[0m");
    }

    #[test]
    fn test_simple_mode_ignores_highlight_flags() {
        let style = ColorStyle {
            mode: ColorMode::Simple,
            background: true,
            foreground: false,
        };
        assert_eq!(colorize("INFO", MSG, style), colorize("INFO", MSG, ColorStyle::simple()));
    }

    #[test]
    fn test_extended_both_flags() {
        let (level, message) = colorize("INFO", MSG, ColorStyle::extended(true, true));
        assert_eq!(level, "\x1b[44;34mINFO\x1b[0m");
        assert_eq!(message, "\x1b[34mTest message\x1b[0m");
    }

    #[test]
    fn test_extended_flags_toggle_independently() {
        let (level, message) = colorize("SUCCESS", MSG, ColorStyle::extended(false, true));
        assert_eq!(level, "SUCCESS");
        assert_eq!(message, "\x1b[32mTest message\x1b[0m");

        let (level, message) = colorize("SUCCESS", MSG, ColorStyle::extended(true, false));
        assert_eq!(level, "\x1b[42;32mSUCCESS\x1b[0m");
        assert_eq!(message, MSG);

        let (level, message) = colorize("SUCCESS", MSG, ColorStyle::extended(false, false));
        assert_eq!(level, "SUCCESS");
        assert_eq!(message, MSG);
    }

    #[test]
    fn test_escapes_are_paired() {
        for level in Level::ALL {
            let (tag, text) = colorize(level.as_str(), MSG, ColorStyle::default());
            for part in [&tag, &text] {
                assert_eq!(part.matches("\x1b[").count(), 2);
                assert!(part.ends_with(RESET));
            }
        }
    }
}
