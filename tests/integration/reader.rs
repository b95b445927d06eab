//! Prefix reader against files and chained streams

use crate::common::write_file;
use content_sniffer::utils::{read_file_prefix, sniff_reader};
use content_sniffer::SNIFF_LEN;
use std::fs::File;
use std::io::{Cursor, Read};
use tempfile::TempDir;

#[test]
fn test_sniff_reader_on_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_file(dir.path(), "archive", b"PK\x03\x04\x14\x00\x08\x00");

    let detection = sniff_reader(File::open(&path)?)?;
    assert_eq!(detection.mime_type, "application/zip");
    assert_eq!(detection.essence(), "application/zip");
    Ok(())
}

#[test]
fn test_sniff_reader_across_chained_sources() -> anyhow::Result<()> {
    // header split over two readers, as when a caller re-prepends peeked bytes
    let reader = Cursor::new(b"\x1F\x8B".to_vec()).chain(Cursor::new(b"\x08\x00\x00".to_vec()));
    assert_eq!(sniff_reader(reader)?.mime_type, "application/x-gzip");
    Ok(())
}

#[test]
fn test_read_file_prefix_caps_at_window() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_file(dir.path(), "long.txt", &vec![b'a'; SNIFF_LEN * 3]);

    assert_eq!(read_file_prefix(&path)?.len(), SNIFF_LEN);
    Ok(())
}

#[test]
fn test_empty_file_is_plain_text() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_file(dir.path(), "empty", b"");

    let detection = sniff_reader(File::open(&path)?)?;
    assert_eq!(detection.mime_type, "text/plain; charset=utf-8");
    assert_eq!(detection.charset(), Some("utf-8"));
    Ok(())
}
