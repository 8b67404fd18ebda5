//! Log truncation utilities
//!
//! Keeps response bodies from flooding the debug/error logs.

use std::borrow::Cow;

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary not after `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for logging.
///
/// Strings within the limit are borrowed as is; longer ones keep the first
/// `TRUNCATE_LIMIT` bytes (cut on a char boundary) plus the total length.
pub fn truncate_for_log(s: &str) -> Cow<'_, str> {
    if s.len() <= TRUNCATE_LIMIT {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        ))
    }
}

/// Truncate a raw payload for logging (invalid UTF-8 is replaced).
pub fn payload_for_log(payload: &[u8]) -> String {
    truncate_for_log(&String::from_utf8_lossy(payload)).into_owned()
}
