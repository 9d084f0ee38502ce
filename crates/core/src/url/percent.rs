//! Percent-encoding over the UTF-8 bytes of a string.
//!
//! Both directions are total: encoding cannot fail, and decoding repairs
//! malformed input in place instead of rejecting it.

use percent_encoding::{percent_decode_str, percent_encode_byte};

/// Characters that are never escaped by the standalone encoder tool, on top
/// of ASCII letters and digits.
pub const UNRESERVED: &str = "-._~";

/// Percent-encode `text`.
///
/// Every byte of the UTF-8 encoding that is not an ASCII letter, digit, or an
/// ASCII character listed in `safe` becomes `%XX` with uppercase hex digits.
/// Space is encoded as `%20`; there is no `+` substitution. Non-ASCII bytes
/// are always escaped, so non-ASCII characters in `safe` have no effect.
pub fn encode(text: &str, safe: &str) -> String {
    let safe = safe.as_bytes();
    let mut encoded = String::with_capacity(text.len());

    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || (byte.is_ascii() && safe.contains(&byte)) {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(percent_encode_byte(byte));
        }
    }

    encoded
}

/// Percent-decode `text`.
///
/// A `%` followed by two hex digits becomes the byte it names. Any other `%`
/// is kept verbatim and scanning resumes at the next character. The decoded
/// bytes are read as UTF-8, with each malformed or truncated sequence
/// replaced by U+FFFD.
pub fn decode(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}
