//! Content sniffing
//!
//! Determines the MIME type of a byte buffer from its first [`SNIFF_LEN`] bytes, per the
//! MIME sniffing standard (<https://mimesniff.spec.whatwg.org/>). The table in
//! [`table::SIGNATURES`] is tried in order and the first match wins; when nothing
//! matches the buffer is classified as plain text or binary from its control bytes.
//!
//! Detection never fails. An empty buffer is plain text.
//!
//! ```rust
//! use content_sniffer::sniff::detect_content_type;
//!
//! assert_eq!(detect_content_type(b"%PDF-1.7"), "application/pdf");
//! assert_eq!(detect_content_type(b"  <!doctype html>"), "text/html; charset=utf-8");
//! assert_eq!(detect_content_type(b"hello"), "text/plain; charset=utf-8");
//! assert_eq!(detect_content_type(&[0x00, 0x01, 0x02]), "application/octet-stream");
//! ```

pub mod signature;
pub mod table;

pub use signature::{Mask, Rule, Signature};
pub use table::SIGNATURES;

use tracing::trace;

use crate::types::detection::{Detection, MatchSource};

/// Number of leading bytes that can influence the result
pub const SNIFF_LEN: usize = 512;

/// Return the MIME type of `data`
///
/// Only the first [`SNIFF_LEN`] bytes are inspected; longer buffers may be passed as-is.
pub fn detect_content_type(data: &[u8]) -> &'static str {
    sniff(data).mime_type
}

/// Like [`detect_content_type`], but report which rule decided
pub fn sniff(data: &[u8]) -> Detection {
    let data = &data[..data.len().min(SNIFF_LEN)];

    for (index, rule) in SIGNATURES.iter().enumerate() {
        if rule.matches(data) {
            trace!(index, rule = rule.name(), "signature matched");
            return Detection {
                mime_type: rule.mime_type(),
                kind: rule.kind(),
                source: MatchSource::Signature {
                    index,
                    name: rule.name(),
                },
            };
        }
    }

    if let Some(offset) = data.iter().position(|&b| is_binary_byte(b)) {
        trace!(offset, "binary byte found, falling back to octet-stream");
        Detection::binary_fallback()
    } else {
        trace!(len = data.len(), "no binary bytes, falling back to plain text");
        Detection::text_fallback()
    }
}

/// Whitespace byte as defined by the sniffing standard (TAB, LF, FF, CR, SPACE)
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | 0x0C | b'\r' | b' ')
}

/// Tag-terminating byte (SPACE or `>`)
#[inline]
pub fn is_tag_terminator(b: u8) -> bool {
    matches!(b, b' ' | b'>')
}

/// Control byte that marks content as binary
///
/// Everything below 0x20 except TAB, LF, FF, CR and ESC.
#[inline]
pub fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

/// Index of the first non-whitespace byte, or `data.len()` if there is none
pub fn first_non_whitespace(data: &[u8]) -> usize {
    data.iter()
        .position(|&b| !is_whitespace(b))
        .unwrap_or(data.len())
}
