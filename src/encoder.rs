use serde::{Deserialize, Serialize};

use crate::isa::utpu16::{self, AliasDesc, Opcode, RunFlags, ADDR_MASK, MODE0, MODE1};
use crate::tokenizer::{tokenize, Tokens};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AsmConfig {
    /// Reject malformed or field-overflowing numerals instead of masking
    /// them to the field width. Off by default to match the uTPU toolchain.
    pub strict_numerals: bool,
}

impl Default for AsmConfig {
    fn default() -> Self {
        Self {
            strict_numerals: false,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("line {line}: unknown instruction '{mnemonic}'")]
    UnknownInstruction { line: usize, mnemonic: String },
    #[error("line {line}: STORE requires 2 operands: source, dest")]
    MissingOperand { line: usize },
    #[error("line {line}: bad numeral '{token}'")]
    BadNumeral { line: usize, token: String },
}

/// Words produced by one source line. STORE is the only multi-word form:
/// mode word, source value, destination address, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoded {
    Empty,
    Single(u16),
    Triple([u16; 3]),
}

impl Encoded {
    pub fn words(&self) -> &[u16] {
        match self {
            Encoded::Empty => &[],
            Encoded::Single(w) => std::slice::from_ref(w),
            Encoded::Triple(ws) => ws,
        }
    }

    pub fn len(&self) -> usize {
        self.words().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Encoded::Empty)
    }
}

/// Encode one raw source line. Blank and comment-only lines yield
/// `Encoded::Empty`; everything else resolves through the alias table and
/// dispatches to the opcode's own packing rules.
pub fn encode_line(line: &str, line_no: usize, cfg: &AsmConfig) -> Result<Encoded, AsmError> {
    match tokenize(line) {
        None => Ok(Encoded::Empty),
        Some(tokens) => encode_tokens(&tokens, line_no, cfg),
    }
}

pub fn encode_tokens(t: &Tokens, line_no: usize, cfg: &AsmConfig) -> Result<Encoded, AsmError> {
    let desc = utpu16::resolve(&t.mnemonic).ok_or_else(|| AsmError::UnknownInstruction {
        line: line_no,
        mnemonic: t.raw_mnemonic.clone(),
    })?;

    match desc.op {
        // Opcode only; trailing operands are ignored.
        Opcode::Nop | Opcode::Halt => Ok(Encoded::Single(desc.op.code())),
        Opcode::Fetch | Opcode::Load => encode_addressed(desc, &t.operands, line_no, cfg),
        Opcode::Run => encode_run(&t.operands, line_no, cfg),
        Opcode::Store => encode_store(desc, &t.operands, line_no, cfg),
    }
}

/// FETCH and LOAD share one shape: Mode0 select from the spelling, optional
/// address operand.
fn encode_addressed(
    desc: &AliasDesc,
    operands: &[String],
    line_no: usize,
    cfg: &AsmConfig,
) -> Result<Encoded, AsmError> {
    let addr = match operands.first() {
        Some(tok) => parse_addr(tok, line_no, cfg)?,
        None => 0,
    };
    let modes = if desc.mode0 { MODE0 } else { 0 };
    Ok(Encoded::Single(utpu16::pack(desc.op, modes, addr)))
}

fn encode_run(operands: &[String], line_no: usize, cfg: &AsmConfig) -> Result<Encoded, AsmError> {
    let mut flags = RunFlags::default();
    let mut addr = 0u16;
    for tok in operands {
        let upper = tok.to_uppercase();
        let has_flags = upper.contains(['C', 'Q', 'R']);
        let starts_digit = upper.chars().next().map_or(false, |c| c.is_ascii_digit());
        if has_flags && !starts_digit {
            // A flag token replaces the whole flag state rather than merging
            // into it; the last flag token wins.
            flags = RunFlags::empty();
            flags.set(RunFlags::COMPUTE, upper.contains('C'));
            flags.set(RunFlags::QUANT, upper.contains('Q'));
            flags.set(RunFlags::RELU, upper.contains('R'));
        } else {
            addr = parse_addr(tok, line_no, cfg)?;
        }
    }
    Ok(Encoded::Single(utpu16::pack(Opcode::Run, flags.bits(), addr)))
}

fn encode_store(
    desc: &AliasDesc,
    operands: &[String],
    line_no: usize,
    cfg: &AsmConfig,
) -> Result<Encoded, AsmError> {
    if operands.len() < 2 {
        return Err(AsmError::MissingOperand { line: line_no });
    }

    // An immediate source occupies its own word and is not masked; an
    // address source sets Mode1 and is masked like every other address.
    let (source_is_addr, source) = match operands[0].strip_prefix('#') {
        Some(imm) => (false, parse_imm(imm, line_no, cfg)?),
        None => (true, parse_addr(&operands[0], line_no, cfg)?),
    };
    let dest = parse_addr(&operands[1], line_no, cfg)?;

    let mut modes = 0;
    if desc.mode0 {
        modes |= MODE0;
    }
    if source_is_addr {
        modes |= MODE1;
    }
    Ok(Encoded::Triple([
        utpu16::pack(Opcode::Store, modes, 0),
        source,
        dest,
    ]))
}

/// `0x`/`0X` selects hexadecimal, otherwise decimal with an optional sign.
/// Returns `None` when the token does not parse.
fn parse_raw(token: &str) -> Option<i64> {
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()
    } else {
        token.parse::<i64>().ok()
    }
}

/// 16-bit field (STORE immediate). Values wrap through the low 16 bits and
/// malformed tokens evaluate to 0, unless strict mode rejects them.
fn parse_imm(token: &str, line_no: usize, cfg: &AsmConfig) -> Result<u16, AsmError> {
    match parse_raw(token) {
        Some(v) if !cfg.strict_numerals => Ok(v as u16),
        Some(v) if (0..=i64::from(u16::MAX)).contains(&v) => Ok(v as u16),
        _ => strict_or_zero(token, line_no, cfg),
    }
}

/// 9-bit address field; same permissive masking, strict mode rejects values
/// that do not fit.
fn parse_addr(token: &str, line_no: usize, cfg: &AsmConfig) -> Result<u16, AsmError> {
    match parse_raw(token) {
        Some(v) if !cfg.strict_numerals => Ok(v as u16 & ADDR_MASK),
        Some(v) if (0..=i64::from(ADDR_MASK)).contains(&v) => Ok(v as u16),
        _ => strict_or_zero(token, line_no, cfg),
    }
}

fn strict_or_zero(token: &str, line_no: usize, cfg: &AsmConfig) -> Result<u16, AsmError> {
    if cfg.strict_numerals {
        Err(AsmError::BadNumeral {
            line: line_no,
            token: token.to_string(),
        })
    } else {
        Ok(0)
    }
}
