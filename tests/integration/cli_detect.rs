//! CLI detect command over real files
//!
//! Drives `DetectCommand` the way the binary does, minus stdout, against a temp
//! directory of small fixture files.

use crate::common::fixtures::mp4_ftyp;
use crate::common::write_file;
use content_sniffer::cli::commands::detect::{
    expand_patterns, render_records, sniff_path, DetectCommand,
};
use content_sniffer::cli::commands::OutputFormat;
use content_sniffer::errors::{AppError, AppResult};
use content_sniffer::types::FormatKind;
use std::io;
use tempfile::TempDir;

fn fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a_page.html", b"\n  <!DOCTYPE html>\n<html></html>");
    write_file(dir.path(), "b_image.png", b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR");
    write_file(dir.path(), "c_clip.mp4", &mp4_ftyp(b"mp42", &[b"isom"]));
    write_file(dir.path(), "d_notes.txt", b"shopping list: eggs, milk");
    write_file(dir.path(), "e_blob.bin", &[0x00, 0x01, 0x02, 0x03, 0xFF]);
    dir
}

fn pattern(dir: &TempDir, glob: &str) -> String {
    dir.path().join(glob).display().to_string()
}

#[test]
fn test_detect_glob_in_sorted_order() -> AppResult<()> {
    let dir = fixture_dir();
    let command = DetectCommand {
        paths: vec![pattern(&dir, "*")],
        ..Default::default()
    };

    let records = command.collect_records(io::empty(), 0)?;
    let mimes: Vec<&str> = records.iter().map(|r| r.mime_type).collect();
    assert_eq!(
        mimes,
        vec![
            "text/html; charset=utf-8",
            "image/png",
            "video/mp4",
            "text/plain; charset=utf-8",
            "application/octet-stream",
        ]
    );
    assert_eq!(records[2].kind, FormatKind::Video);
    assert_eq!(records[4].bytes_read, 5);
    Ok(())
}

#[test]
fn test_detect_json_output() -> anyhow::Result<()> {
    let dir = fixture_dir();
    let command = DetectCommand {
        paths: vec![pattern(&dir, "*.png"), pattern(&dir, "*.bin")],
        ..Default::default()
    };

    let records = command.collect_records(io::empty(), 4)?;
    let rendered = render_records(&records, OutputFormat::Json)?;
    let json: serde_json::Value = serde_json::from_str(&rendered)?;
    let items = json.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["mime_type"], "image/png");
    assert_eq!(items[0]["kind"], "image");
    assert_eq!(items[0]["source"]["type"], "signature");
    assert_eq!(items[0]["source"]["name"], "PNG image");
    assert_eq!(items[0]["preview"], "89504e47...");
    assert_eq!(items[1]["source"]["type"], "binary_fallback");
    Ok(())
}

#[test]
fn test_detect_text_output() -> AppResult<()> {
    let dir = fixture_dir();
    let txt = dir.path().join("d_notes.txt");
    let record = sniff_path(&txt, 0)?;

    let text = render_records(&[record], OutputFormat::Text)?;
    assert_eq!(text, format!("{}: text/plain; charset=utf-8\n", txt.display()));
    Ok(())
}

#[test]
fn test_literal_path_with_glob_characters() -> AppResult<()> {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "scan[1].pdf", b"%PDF-1.7\n");

    let paths = expand_patterns(&[path.display().to_string()])?;
    assert_eq!(paths, vec![path.clone()]);
    assert_eq!(sniff_path(&path, 0)?.mime_type, "application/pdf");
    Ok(())
}

#[test]
fn test_directory_argument_is_rejected() {
    let dir = fixture_dir();
    let err = expand_patterns(&[dir.path().display().to_string()]).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_file_larger_than_window_reads_only_prefix() -> AppResult<()> {
    let dir = TempDir::new().unwrap();
    let mut contents = b"GIF89a".to_vec();
    contents.resize(4096, 0x00);
    let path = write_file(dir.path(), "big.gif", &contents);

    let record = sniff_path(&path, 0)?;
    assert_eq!(record.mime_type, "image/gif");
    assert_eq!(record.bytes_read, content_sniffer::SNIFF_LEN);
    Ok(())
}
