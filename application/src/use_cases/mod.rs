//! Use cases for the application layer.

pub mod write_log;
