/// One tokenized source line. The mnemonic is uppercased for table matching;
/// the original spelling is kept for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    pub mnemonic: String,
    pub raw_mnemonic: String,
    pub operands: Vec<String>,
}

/// Strip comments, trim, and split one line into mnemonic + operand tokens.
/// Returns `None` for a line with no content (blank or comment-only).
///
/// `#` opens a comment only as the first non-whitespace character of the
/// line, so it stays usable mid-line as the STORE immediate sigil; `;` cuts
/// the line anywhere.
pub fn tokenize(line: &str) -> Option<Tokens> {
    if line.trim_start().starts_with('#') {
        return None;
    }
    let mut s = line;
    if let Some(p) = s.find(';') {
        s = &s[..p];
    }
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let mut fields = s
        .split([' ', '\t', ','])
        .filter(|t| !t.is_empty())
        .map(str::to_string);
    let raw_mnemonic = fields.next()?;
    Some(Tokens {
        mnemonic: raw_mnemonic.to_uppercase(),
        raw_mnemonic,
        operands: fields.collect(),
    })
}
