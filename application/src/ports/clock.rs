//! Clock port
//!
//! Supplies the local time used for line stamps and daily file names.

use chrono::{Local, NaiveDateTime};

pub trait Clock: Send {
    /// Current local wall-clock time
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time zone
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
