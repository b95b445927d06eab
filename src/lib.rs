//! MIME Content Sniffer
//!
//! Determines the content type of a byte buffer from its first 512 bytes using the
//! ordered signature table of the MIME sniffing standard. See [`sniff`] for the
//! algorithm; [`cli`], [`config`] and [`utils`] are the glue around it.

pub mod cli;
pub mod config;
pub mod errors;
pub mod sniff;
pub mod types;
pub mod utils;

pub use sniff::{detect_content_type, SIGNATURES, SNIFF_LEN};
