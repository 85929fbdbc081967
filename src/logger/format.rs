//! Access log format module
//!
//! One line per request: `<method> <fingerprint> <path>`. The fingerprint is
//! a short prefix of the session identifier so full identifiers never reach
//! the log. Control characters in the path are escaped so an entry always
//! occupies exactly one physical line.

use std::fmt::{self, Write as _};

/// Access log entry for a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLogEntry {
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Truncated session identifier, or `none`
    pub fingerprint: String,
    /// Decoded request path
    pub path: String,
}

impl AccessLogEntry {
    pub fn new(method: &str, fingerprint: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            fingerprint: fingerprint.to_string(),
            path: path.to_string(),
        }
    }
}

impl fmt::Display for AccessLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.method, self.fingerprint)?;
        write_escaped(f, &self.path)
    }
}

/// Write `text`, replacing control characters with `\n`, `\u{7f}`-style escapes
fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        if c.is_control() {
            write!(f, "{}", c.escape_default())?;
        } else {
            f.write_char(c)?;
        }
    }
    Ok(())
}
