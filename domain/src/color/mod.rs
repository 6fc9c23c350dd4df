//! Console coloring for log levels.

pub mod colorize;
pub mod palette;

pub use colorize::{ColorStyle, colorize};
pub use palette::{AnsiColor, RESET};
