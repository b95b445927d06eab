pub mod detection;

// Re-export commonly used types
pub use detection::{Detection, FormatKind, MatchSource, OCTET_STREAM, TEXT_PLAIN_UTF8};
