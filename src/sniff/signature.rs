//! Signature records and the pattern-matching primitive
//!
//! Every table entry except the MP4 probe is a [`Signature`]: a byte pattern compared
//! against the start of the input under a per-byte mask. Masks cover the three shapes
//! the table needs (exact bytes, wildcard positions and ASCII case-insensitivity), so
//! matching stays a single loop regardless of which shape a signature uses.

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};

use super::{first_non_whitespace, is_tag_terminator};
use crate::types::detection::FormatKind;

/// Per-byte mask applied to both the input and the pattern before comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    /// Every byte must match exactly (`0xFF` everywhere)
    Exact,
    /// Explicit mask bytes; `0x00` marks a wildcard position
    Bytes(&'static [u8]),
    /// `0xDF` under uppercase ASCII pattern letters, `0xFF` elsewhere
    AsciiCaseInsensitive,
}

impl Mask {
    #[inline]
    fn byte_at(&self, pattern: &[u8], index: usize) -> u8 {
        match self {
            Mask::Exact => 0xFF,
            Mask::Bytes(mask) => mask.get(index).copied().unwrap_or(0xFF),
            Mask::AsciiCaseInsensitive => {
                if pattern[index].is_ascii_uppercase() {
                    0xDF
                } else {
                    0xFF
                }
            }
        }
    }
}

/// One recognisable format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub name: &'static str,
    pub pattern: &'static [u8],
    pub mask: Mask,
    /// Skip leading TAB/LF/FF/CR/SPACE before comparing
    pub skip_leading_whitespace: bool,
    /// The byte after the pattern must be SPACE or `>`
    pub tag_terminated: bool,
    pub mime_type: &'static str,
    pub kind: FormatKind,
}

impl Signature {
    /// Exact byte prefix
    pub const fn exact(
        name: &'static str,
        pattern: &'static [u8],
        mime_type: &'static str,
        kind: FormatKind,
    ) -> Self {
        Self {
            name,
            pattern,
            mask: Mask::Exact,
            skip_leading_whitespace: false,
            tag_terminated: false,
            mime_type,
            kind,
        }
    }

    /// Byte prefix compared under an explicit mask of the same length
    pub const fn masked(
        name: &'static str,
        pattern: &'static [u8],
        mask: &'static [u8],
        mime_type: &'static str,
        kind: FormatKind,
    ) -> Self {
        Self {
            name,
            pattern,
            mask: Mask::Bytes(mask),
            skip_leading_whitespace: false,
            tag_terminated: false,
            mime_type,
            kind,
        }
    }

    /// HTML opener: case-insensitive, after whitespace, followed by SPACE or `>`
    ///
    /// `pattern` must be written in uppercase.
    pub const fn html(name: &'static str, pattern: &'static [u8]) -> Self {
        Self {
            name,
            pattern,
            mask: Mask::AsciiCaseInsensitive,
            skip_leading_whitespace: true,
            tag_terminated: true,
            mime_type: crate::types::detection::TEXT_HTML_UTF8,
            kind: FormatKind::Html,
        }
    }

    pub const fn skipping_whitespace(mut self) -> Self {
        self.skip_leading_whitespace = true;
        self
    }

    /// Explicit masks must cover the pattern byte for byte
    pub fn is_well_formed(&self) -> bool {
        match self.mask {
            Mask::Bytes(mask) => mask.len() == self.pattern.len(),
            Mask::Exact | Mask::AsciiCaseInsensitive => true,
        }
    }

    /// Report whether `input` starts with this signature
    ///
    /// Never reads past the end of `input`; a short input simply fails to match.
    pub fn matches(&self, input: &[u8]) -> bool {
        if !self.is_well_formed() {
            return false;
        }

        let start = if self.skip_leading_whitespace {
            first_non_whitespace(input)
        } else {
            0
        };
        let data = &input[start..];

        let required = self.pattern.len() + usize::from(self.tag_terminated);
        if data.len() < required {
            return false;
        }

        for (index, &pattern_byte) in self.pattern.iter().enumerate() {
            let mask = self.mask.byte_at(self.pattern, index);
            if data[index] & mask != pattern_byte & mask {
                return false;
            }
        }

        !self.tag_terminated || is_tag_terminator(data[self.pattern.len()])
    }

    /// Mask bytes as they apply to each pattern position
    pub fn expanded_mask(&self) -> Vec<u8> {
        (0..self.pattern.len())
            .map(|index| self.mask.byte_at(self.pattern, index))
            .collect()
    }
}

/// An entry in the sniffing table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Signature(Signature),
    /// ISO base media `ftyp` box advertising an `mp4` brand
    Mp4Box,
}

pub const MP4_MIME: &str = "video/mp4";

impl Rule {
    pub fn matches(&self, input: &[u8]) -> bool {
        match self {
            Rule::Signature(signature) => signature.matches(input),
            Rule::Mp4Box => matches_mp4_box(input),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Signature(signature) => signature.name,
            Rule::Mp4Box => "MP4 ftyp box",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Rule::Signature(signature) => signature.mime_type,
            Rule::Mp4Box => MP4_MIME,
        }
    }

    pub fn kind(&self) -> FormatKind {
        match self {
            Rule::Signature(signature) => signature.kind,
            Rule::Mp4Box => FormatKind::Video,
        }
    }
}

/// Probe for an MP4 `ftyp` box
///
/// Layout: `[box size: u32 BE]["ftyp"][major brand][minor version][compatible brands...]`.
/// The box must fit inside the input and its size must be a multiple of four. The
/// major and compatible brand slots are scanned for one starting with `mp4`; the minor
/// version slot at offset 12 is not a brand and is skipped.
pub fn matches_mp4_box(input: &[u8]) -> bool {
    if input.len() < 12 {
        return false;
    }

    let box_size = match Cursor::new(input).read_u32::<BigEndian>() {
        Ok(size) => size as usize,
        Err(_) => return false,
    };
    if input.len() < box_size || box_size % 4 != 0 {
        return false;
    }

    if &input[4..8] != b"ftyp" {
        return false;
    }

    (8..box_size)
        .step_by(4)
        .filter(|&offset| offset != 12)
        .any(|offset| &input[offset..offset + 3] == b"mp4")
}
