//! Application layer for twlc
//!
//! This crate contains the [`Logger`] use case and the ports it writes
//! through. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    clock::{Clock, SystemClock},
    log_file_store::LogFileStore,
};
pub use use_cases::write_log::Logger;
