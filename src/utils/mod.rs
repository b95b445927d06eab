//! I/O and presentation helpers around the sniffer

pub mod input;
pub mod preview;

pub use input::{read_file_prefix, read_prefix, sniff_reader};
