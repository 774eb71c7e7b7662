use anyhow::Result;
use std::path::Path;

/// Hex text format: one 4-digit uppercase value per line, emission order.
pub fn hex_lines(words: &[u16]) -> String {
    let mut out = String::with_capacity(words.len() * 5);
    for w in words {
        out.push_str(&format!("{w:04X}\n"));
    }
    out
}

/// Binary format: low byte first then high byte, no separators or headers.
/// The uTPU UART consumes the low half of each word first.
pub fn words_to_le_bytes(words: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * 2);
    for w in words {
        out.extend_from_slice(&w.to_le_bytes());
    }
    out
}

pub fn words_from_le_bytes(bytes: &[u8]) -> Result<Vec<u16>> {
    anyhow::ensure!(bytes.len() % 2 == 0, "odd byte count in word stream");
    Ok(bytes
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect())
}

pub fn write_mem(path: &Path, words: &[u16]) -> Result<()> {
    std::fs::write(path, hex_lines(words))?;
    Ok(())
}

pub fn write_bin(path: &Path, words: &[u16]) -> Result<()> {
    std::fs::write(path, words_to_le_bytes(words))?;
    Ok(())
}
