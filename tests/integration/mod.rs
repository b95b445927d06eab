//! Integration Tests Module
//!
//! End-to-end tests through the file reader and CLI command layers.

pub mod cli_detect;
pub mod reader;
