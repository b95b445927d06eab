use crate::cli::commands::OutputFormat;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::sniff::{sniff, SNIFF_LEN};
use crate::types::detection::{FormatKind, MatchSource};
use crate::utils::input::{read_file_prefix, read_prefix};
use crate::utils::preview::{ascii_preview, hex_preview};
use clap::Args;
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Detect the content type of files or standard input
#[derive(Args, Debug, Default)]
pub struct DetectCommand {
    /// Files or glob patterns to sniff
    pub paths: Vec<String>,

    /// Sniff standard input (reported as "-")
    #[arg(long)]
    pub stdin: bool,

    /// Output format: text, json (overrides config)
    #[arg(long)]
    pub format: Option<String>,

    /// Number of leading bytes to show as hex, 0 to disable (overrides config)
    #[arg(long)]
    pub preview: Option<usize>,
}

/// One sniffed input
#[derive(Debug, Clone, Serialize)]
pub struct DetectRecord {
    pub path: String,
    pub mime_type: &'static str,
    pub kind: FormatKind,
    pub source: MatchSource,
    pub bytes_read: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascii: Option<String>,
}

impl DetectRecord {
    fn from_prefix(path: String, prefix: &[u8], preview_bytes: usize) -> Self {
        let detection = sniff(prefix);
        Self {
            path,
            mime_type: detection.mime_type,
            kind: detection.kind,
            source: detection.source,
            bytes_read: prefix.len(),
            preview: (preview_bytes > 0).then(|| hex_preview(prefix, preview_bytes)),
            ascii: (preview_bytes > 0).then(|| ascii_preview(prefix, preview_bytes)),
        }
    }
}

impl DetectCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        let (format, preview_bytes) = self.resolve(config)?;

        let records = self.collect_records(io::stdin().lock(), preview_bytes)?;
        info!("Sniffed {} input(s)", records.len());

        print!("{}", render_records(&records, format)?);
        Ok(())
    }

    /// Output format and preview length, with CLI arguments overriding config values
    pub fn resolve(&self, config: &AppConfig) -> AppResult<(OutputFormat, usize)> {
        let format = OutputFormat::parse(self.format.as_deref().unwrap_or(&config.output.format))?;
        let preview_bytes = self.preview.unwrap_or(config.output.preview_bytes);
        Ok((format, preview_bytes))
    }

    /// Sniff every requested input in argument order
    ///
    /// `stdin` is only read when `--stdin` was given.
    pub fn collect_records<R: Read>(
        &self,
        stdin: R,
        preview_bytes: usize,
    ) -> AppResult<Vec<DetectRecord>> {
        if self.paths.is_empty() && !self.stdin {
            return Err(AppError::InvalidInput(
                "No input given: pass file paths, glob patterns or --stdin".to_string(),
            ));
        }

        let mut records = Vec::new();

        if self.stdin {
            let prefix = read_prefix(stdin, SNIFF_LEN)?;
            records.push(DetectRecord::from_prefix(
                "-".to_string(),
                &prefix,
                preview_bytes,
            ));
        }

        for path in expand_patterns(&self.paths)? {
            records.push(sniff_path(&path, preview_bytes)?);
        }

        Ok(records)
    }
}

/// Sniff a single file
pub fn sniff_path(path: &Path, preview_bytes: usize) -> AppResult<DetectRecord> {
    let prefix = read_file_prefix(path)?;
    let record = DetectRecord::from_prefix(path.display().to_string(), &prefix, preview_bytes);
    debug!("{} -> {}", record.path, record.mime_type);
    Ok(record)
}

/// Resolve CLI arguments to files
///
/// An argument naming an existing file is taken literally; anything else is expanded
/// as a glob. Directories are skipped during expansion. An argument that resolves to
/// no files is an error.
pub fn expand_patterns(patterns: &[String]) -> AppResult<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let literal = Path::new(pattern);
        if literal.is_file() {
            paths.push(literal.to_path_buf());
            continue;
        }
        if literal.is_dir() {
            return Err(AppError::InvalidInput(format!(
                "{} is a directory; use a glob such as '{}/*'",
                pattern,
                pattern.trim_end_matches('/')
            )));
        }

        let before = paths.len();
        for entry in glob::glob(pattern)? {
            let path = entry?;
            if path.is_file() {
                paths.push(path);
            }
        }

        if paths.len() == before {
            return Err(AppError::InvalidInput(format!(
                "No files match '{}'",
                pattern
            )));
        }
    }

    Ok(paths)
}

/// Render records as text lines or a JSON array
pub fn render_records(records: &[DetectRecord], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(records)?)),
        OutputFormat::Text => Ok(records
            .iter()
            .map(|record| match (&record.preview, &record.ascii) {
                (Some(preview), Some(ascii)) => format!(
                    "{}: {}  [{}] \"{}\"\n",
                    record.path, record.mime_type, preview, ascii
                ),
                _ => format!("{}: {}\n", record.path, record.mime_type),
            })
            .collect()),
    }
}
