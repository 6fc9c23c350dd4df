//! Pretty JSON rendering with a 4-space indent

use super::finite::ensure_finite;
use crate::core::error::LoggerError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// Serialize `value` as indented JSON without a trailing newline.
///
/// Field names and order follow the `Serialize` impl. Values JSON cannot
/// represent (maps with non-string keys, NaN or infinite floats) yield
/// [`LoggerError::Serialization`].
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, LoggerError> {
    ensure_finite(value)?;

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    String::from_utf8(buf)
        .map_err(|e| LoggerError::Serialization(serde::ser::Error::custom(e)))
}
