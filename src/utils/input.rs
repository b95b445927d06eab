//! Reading the sniffable prefix of a stream or file
//!
//! Sniffing only looks at the first [`SNIFF_LEN`] bytes, so there is no reason to load
//! more than that. These helpers read up to a limit and tolerate short reads and early
//! EOF.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::sniff::{sniff, SNIFF_LEN};
use crate::types::detection::Detection;

/// Read at most `limit` bytes from `reader`
pub fn read_prefix<R: Read>(reader: R, limit: usize) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(limit.min(SNIFF_LEN));
    reader.take(limit as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Read the sniffable prefix of the file at `path`
pub fn read_file_prefix(path: &Path) -> AppResult<Vec<u8>> {
    let file = File::open(path).map_err(|e| {
        AppError::Io(io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let prefix = read_prefix(file, SNIFF_LEN)?;
    debug!("Read {} bytes from {}", prefix.len(), path.display());
    Ok(prefix)
}

/// Read the sniffable prefix of `reader` and sniff it
pub fn sniff_reader<R: Read>(reader: R) -> io::Result<Detection> {
    let prefix = read_prefix(reader, SNIFF_LEN)?;
    Ok(sniff(&prefix))
}
