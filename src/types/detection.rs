//! Detection results
//!
//! The sniffer itself only ever needs a MIME string, but callers usually want to know
//! *why* a type was chosen: which table entry matched, or whether the text/binary
//! fallback decided. [`Detection`] carries that alongside a coarse [`FormatKind`].
//!
//! ## Usage
//!
//! ```rust
//! use content_sniffer::sniff::sniff;
//! use content_sniffer::types::detection::{FormatKind, MatchSource};
//!
//! let detection = sniff(b"\x89PNG\r\n\x1a\n");
//! assert_eq!(detection.mime_type, "image/png");
//! assert_eq!(detection.kind, FormatKind::Image);
//! assert!(matches!(detection.source, MatchSource::Signature { .. }));
//! ```

use serde::Serialize;

/// Generic plain-text result, also used for the UTF-8 BOM signature
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// Generic binary result
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Result of every HTML signature
pub const TEXT_HTML_UTF8: &str = "text/html; charset=utf-8";

/// Coarse format family of a detected type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// HTML markup (tag or comment opener)
    Html,
    /// XML declaration
    Xml,
    /// PDF and PostScript
    Document,
    /// Plain text, with or without a byte order mark
    Text,
    /// Raster and icon images
    Image,
    /// Audio containers and tagged streams
    Audio,
    /// Video containers
    Video,
    /// Font files
    Font,
    /// Compressed archives
    Archive,
    /// Anything else: WebAssembly modules and unrecognised binary data
    Binary,
}

impl FormatKind {
    /// Return the display label for this kind
    pub fn category(&self) -> &'static str {
        match self {
            FormatKind::Html | FormatKind::Xml => "Markup",
            FormatKind::Document => "Documents",
            FormatKind::Text => "Text",
            FormatKind::Image => "Images",
            FormatKind::Audio => "Audio",
            FormatKind::Video => "Video",
            FormatKind::Font => "Fonts",
            FormatKind::Archive => "Archives",
            FormatKind::Binary => "Other",
        }
    }
}

/// What decided a detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchSource {
    /// A table entry matched; `index` is its position in the table
    Signature { index: usize, name: &'static str },
    /// No entry matched and no binary-indicative byte was found
    TextFallback,
    /// No entry matched and a binary-indicative byte was found
    BinaryFallback,
}

/// Outcome of sniffing one buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub mime_type: &'static str,
    pub kind: FormatKind,
    pub source: MatchSource,
}

impl Detection {
    pub(crate) fn text_fallback() -> Self {
        Self {
            mime_type: TEXT_PLAIN_UTF8,
            kind: FormatKind::Text,
            source: MatchSource::TextFallback,
        }
    }

    pub(crate) fn binary_fallback() -> Self {
        Self {
            mime_type: OCTET_STREAM,
            kind: FormatKind::Binary,
            source: MatchSource::BinaryFallback,
        }
    }

    /// MIME type without parameters (`text/html; charset=utf-8` -> `text/html`)
    pub fn essence(&self) -> &'static str {
        match self.mime_type.split_once(';') {
            Some((essence, _)) => essence.trim_end(),
            None => self.mime_type,
        }
    }

    /// Value of the `charset` parameter, if the type carries one
    pub fn charset(&self) -> Option<&'static str> {
        self.mime_type
            .split(';')
            .skip(1)
            .filter_map(|param| param.trim().split_once('='))
            .find(|(key, _)| key.eq_ignore_ascii_case("charset"))
            .map(|(_, value)| value)
    }

    /// True when no table entry matched
    pub fn is_fallback(&self) -> bool {
        !matches!(self.source, MatchSource::Signature { .. })
    }

    pub fn category(&self) -> &'static str {
        self.kind.category()
    }
}
