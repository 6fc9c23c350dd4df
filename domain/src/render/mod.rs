//! Structured value rendering for debugging.
//!
//! Neither helper goes through the logger's sinks; callers usually pass the
//! result to a writer themselves.

mod debug;
mod finite;
mod json;

pub use debug::render_debug;
pub use json::render_json;
