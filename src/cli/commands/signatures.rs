use crate::cli::commands::OutputFormat;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::sniff::{Rule, SIGNATURES};
use crate::types::detection::FormatKind;
use crate::utils::preview::spaced_hex;
use clap::Args;
use serde::Serialize;

/// List the sniffing table in precedence order
#[derive(Args, Debug, Default)]
pub struct SignaturesCommand {
    /// Output format: text, json (overrides config)
    #[arg(long)]
    pub format: Option<String>,
}

/// Serialisable view of one table entry
#[derive(Debug, Clone, Serialize)]
pub struct SignatureEntry {
    pub index: usize,
    pub name: &'static str,
    pub mime_type: &'static str,
    pub kind: FormatKind,
    /// Empty for structural probes
    pub pattern: String,
    pub mask: String,
    pub skip_leading_whitespace: bool,
    pub tag_terminated: bool,
}

impl SignaturesCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        let format = OutputFormat::parse(self.format.as_deref().unwrap_or(&config.output.format))?;
        print!("{}", render_entries(&table_entries(), format)?);
        Ok(())
    }
}

/// Describe every table entry in order
pub fn table_entries() -> Vec<SignatureEntry> {
    SIGNATURES
        .iter()
        .enumerate()
        .map(|(index, rule)| match rule {
            Rule::Signature(signature) => SignatureEntry {
                index,
                name: signature.name,
                mime_type: signature.mime_type,
                kind: signature.kind,
                pattern: spaced_hex(signature.pattern),
                mask: spaced_hex(&signature.expanded_mask()),
                skip_leading_whitespace: signature.skip_leading_whitespace,
                tag_terminated: signature.tag_terminated,
            },
            Rule::Mp4Box => SignatureEntry {
                index,
                name: rule.name(),
                mime_type: rule.mime_type(),
                kind: rule.kind(),
                pattern: String::new(),
                mask: String::new(),
                skip_leading_whitespace: false,
                tag_terminated: false,
            },
        })
        .collect()
}

pub fn render_entries(entries: &[SignatureEntry], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(entries)?)),
        OutputFormat::Text => {
            let mut output = String::new();
            for entry in entries {
                let mut flags = Vec::new();
                if entry.skip_leading_whitespace {
                    flags.push("skip-ws");
                }
                if entry.tag_terminated {
                    flags.push("tag-terminated");
                }
                let pattern = if entry.pattern.is_empty() {
                    "(ftyp box probe)"
                } else {
                    entry.pattern.as_str()
                };
                output.push_str(&format!(
                    "{:>2}  {:<24} {:<32} {}{}\n",
                    entry.index,
                    entry.name,
                    entry.mime_type,
                    pattern,
                    if flags.is_empty() {
                        String::new()
                    } else {
                        format!("  [{}]", flags.join(", "))
                    }
                ));
            }
            Ok(output)
        }
    }
}
