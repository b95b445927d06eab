//! The sniffing table
//!
//! Order is precedence: the first entry that matches decides the result, so more
//! specific entries must stay ahead of broader ones. The grouping follows the MIME
//! sniffing standard: markup, documents, byte order marks, images, audio/video,
//! fonts, archives.

use super::signature::{Rule, Signature};
use crate::types::detection::{FormatKind, TEXT_PLAIN_UTF8};

/// The ordered table consulted by [`crate::sniff::sniff`]
pub static SIGNATURES: &[Rule] = &[
    // Markup
    Rule::Signature(Signature::html("HTML doctype", b"<!DOCTYPE HTML")),
    Rule::Signature(Signature::html("HTML <html>", b"<HTML")),
    Rule::Signature(Signature::html("HTML <head>", b"<HEAD")),
    Rule::Signature(Signature::html("HTML <script>", b"<SCRIPT")),
    Rule::Signature(Signature::html("HTML <iframe>", b"<IFRAME")),
    Rule::Signature(Signature::html("HTML <h1>", b"<H1")),
    Rule::Signature(Signature::html("HTML <div>", b"<DIV")),
    Rule::Signature(Signature::html("HTML <font>", b"<FONT")),
    Rule::Signature(Signature::html("HTML <table>", b"<TABLE")),
    Rule::Signature(Signature::html("HTML <a>", b"<A")),
    Rule::Signature(Signature::html("HTML <style>", b"<STYLE")),
    Rule::Signature(Signature::html("HTML <title>", b"<TITLE")),
    Rule::Signature(Signature::html("HTML <b>", b"<B")),
    Rule::Signature(Signature::html("HTML <body>", b"<BODY")),
    Rule::Signature(Signature::html("HTML <br>", b"<BR")),
    Rule::Signature(Signature::html("HTML <p>", b"<P")),
    Rule::Signature(Signature::html("HTML comment", b"<!--")),
    Rule::Signature(
        Signature::exact(
            "XML declaration",
            b"<?xml",
            "text/xml; charset=utf-8",
            FormatKind::Xml,
        )
        .skipping_whitespace(),
    ),
    // Documents
    Rule::Signature(Signature::exact(
        "PDF document",
        b"%PDF-",
        "application/pdf",
        FormatKind::Document,
    )),
    Rule::Signature(Signature::exact(
        "PostScript document",
        b"%!PS-Adobe-",
        "application/postscript",
        FormatKind::Document,
    )),
    // Byte order marks
    Rule::Signature(Signature::masked(
        "UTF-16BE BOM",
        b"\xFE\xFF\x00\x00",
        b"\xFF\xFF\x00\x00",
        "text/plain; charset=utf-16be",
        FormatKind::Text,
    )),
    Rule::Signature(Signature::masked(
        "UTF-16LE BOM",
        b"\xFF\xFE\x00\x00",
        b"\xFF\xFF\x00\x00",
        "text/plain; charset=utf-16le",
        FormatKind::Text,
    )),
    Rule::Signature(Signature::masked(
        "UTF-8 BOM",
        b"\xEF\xBB\xBF\x00",
        b"\xFF\xFF\xFF\x00",
        TEXT_PLAIN_UTF8,
        FormatKind::Text,
    )),
    // Images
    Rule::Signature(Signature::exact(
        "Windows icon",
        b"\x00\x00\x01\x00",
        "image/x-icon",
        FormatKind::Image,
    )),
    Rule::Signature(Signature::exact(
        "Windows cursor",
        b"\x00\x00\x02\x00",
        "image/x-icon",
        FormatKind::Image,
    )),
    Rule::Signature(Signature::exact(
        "BMP image",
        b"BM",
        "image/bmp",
        FormatKind::Image,
    )),
    Rule::Signature(Signature::exact(
        "GIF87a image",
        b"GIF87a",
        "image/gif",
        FormatKind::Image,
    )),
    Rule::Signature(Signature::exact(
        "GIF89a image",
        b"GIF89a",
        "image/gif",
        FormatKind::Image,
    )),
    Rule::Signature(Signature::masked(
        "WebP image",
        b"RIFF\x00\x00\x00\x00WEBPVP",
        b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF\xFF\xFF",
        "image/webp",
        FormatKind::Image,
    )),
    Rule::Signature(Signature::exact(
        "PNG image",
        b"\x89PNG\x0D\x0A\x1A\x0A",
        "image/png",
        FormatKind::Image,
    )),
    Rule::Signature(Signature::exact(
        "JPEG image",
        b"\xFF\xD8\xFF",
        "image/jpeg",
        FormatKind::Image,
    )),
    // Audio and video
    Rule::Signature(Signature::masked(
        "AIFF audio",
        b"FORM\x00\x00\x00\x00AIFF",
        b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF",
        "audio/aiff",
        FormatKind::Audio,
    )),
    Rule::Signature(Signature::exact(
        "MP3 with ID3 tag",
        b"ID3",
        "audio/mpeg",
        FormatKind::Audio,
    )),
    Rule::Signature(Signature::exact(
        "Ogg container",
        b"OggS\x00",
        "application/ogg",
        FormatKind::Audio,
    )),
    Rule::Signature(Signature::exact(
        "Standard MIDI",
        b"MThd\x00\x00\x00\x06",
        "audio/midi",
        FormatKind::Audio,
    )),
    Rule::Signature(Signature::masked(
        "AVI video",
        b"RIFF\x00\x00\x00\x00AVI ",
        b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF",
        "video/avi",
        FormatKind::Video,
    )),
    Rule::Signature(Signature::masked(
        "WAVE audio",
        b"RIFF\x00\x00\x00\x00WAVE",
        b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF",
        "audio/wave",
        FormatKind::Audio,
    )),
    Rule::Mp4Box,
    Rule::Signature(Signature::exact(
        "WebM video",
        b"\x1A\x45\xDF\xA3",
        "video/webm",
        FormatKind::Video,
    )),
    // Fonts
    Rule::Signature(Signature::masked(
        "Embedded OpenType font",
        b"\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00LP",
        b"\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\xFF\xFF",
        "application/vnd.ms-fontobject",
        FormatKind::Font,
    )),
    Rule::Signature(Signature::exact(
        "TrueType font",
        b"\x00\x01\x00\x00",
        "font/ttf",
        FormatKind::Font,
    )),
    Rule::Signature(Signature::exact(
        "OpenType font",
        b"OTTO",
        "font/otf",
        FormatKind::Font,
    )),
    Rule::Signature(Signature::exact(
        "TrueType collection",
        b"ttcf",
        "font/collection",
        FormatKind::Font,
    )),
    Rule::Signature(Signature::exact(
        "WOFF font",
        b"wOFF",
        "font/woff",
        FormatKind::Font,
    )),
    Rule::Signature(Signature::exact(
        "WOFF2 font",
        b"wOF2",
        "font/woff2",
        FormatKind::Font,
    )),
    // Archives
    Rule::Signature(Signature::exact(
        "GZIP archive",
        b"\x1F\x8B\x08",
        "application/x-gzip",
        FormatKind::Archive,
    )),
    Rule::Signature(Signature::exact(
        "ZIP archive",
        b"PK\x03\x04",
        "application/zip",
        FormatKind::Archive,
    )),
    // RAR Labs' published marker blocks; the sniffing standard's RAR entry is wrong
    // (whatwg/mimesniff#63)
    Rule::Signature(Signature::exact(
        "RAR 1.5 archive",
        b"Rar!\x1A\x07\x00",
        "application/x-rar-compressed",
        FormatKind::Archive,
    )),
    Rule::Signature(Signature::exact(
        "RAR 5 archive",
        b"Rar!\x1A\x07\x01\x00",
        "application/x-rar-compressed",
        FormatKind::Archive,
    )),
    Rule::Signature(Signature::exact(
        "WebAssembly module",
        b"\x00\x61\x73\x6D",
        "application/wasm",
        FormatKind::Binary,
    )),
];
