//! Byte previews for reporting what was sniffed

/// Lowercase hex of the first `max_len` bytes, with `...` if truncated
pub fn hex_preview(data: &[u8], max_len: usize) -> String {
    let preview_len = data.len().min(max_len);
    let hex = hex::encode(&data[..preview_len]);
    if data.len() > max_len {
        format!("{}...", hex)
    } else {
        hex
    }
}

/// Printable ASCII rendering of the first `max_len` bytes; other bytes become `.`
pub fn ascii_preview(data: &[u8], max_len: usize) -> String {
    let preview_len = data.len().min(max_len);
    let preview: String = data[..preview_len]
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        })
        .collect();

    if data.len() > max_len {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Hex bytes separated by spaces (`89 50 4e 47`)
pub fn spaced_hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
