use bitflags::bitflags;
use serde::{Deserialize, Serialize};

// uTPU 16-bit instruction word layout:
// bits [2:0] opcode, [3] Mode0, [4] Mode1, [5] Mode2, [6] reserved zero,
// bits [15:7] 9-bit address/immediate field. The meaning of the mode bits
// is opcode-dependent; see the per-opcode encoders.
pub const OPCODE_BITS: u32 = 3;
pub const ADDR_BITS: u32 = 9;
pub const ADDR_SHIFT: u32 = 7;
pub const ADDR_MASK: u16 = 0x1FF;

pub const MODE0: u16 = 1 << 3;
pub const MODE1: u16 = 1 << 4;
pub const MODE2: u16 = 1 << 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opcode {
    Store = 0,
    Fetch = 1,
    Run = 2,
    Load = 3,
    Halt = 4,
    Nop = 5,
}

impl Opcode {
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Opcode of an already-packed word, if the 3-bit code is assigned.
    pub fn from_word(word: u16) -> Option<Opcode> {
        match word & ((1u16 << OPCODE_BITS) - 1) {
            0 => Some(Opcode::Store),
            1 => Some(Opcode::Fetch),
            2 => Some(Opcode::Run),
            3 => Some(Opcode::Load),
            4 => Some(Opcode::Halt),
            5 => Some(Opcode::Nop),
            _ => None,
        }
    }
}

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFlags: u16 {
const COMPUTE = 1 << 3; // compute-enable
const QUANT = 1 << 4;   // quantizer-enable
const RELU = 1 << 5;    // relu-enable
}
}

impl Default for RunFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// One accepted mnemonic spelling. Spellings that differ only in their
/// top/bottom or weight/input suffix map to the same opcode and carry the
/// Mode0 select as table data.
#[derive(Debug, Clone, Copy)]
pub struct AliasDesc {
    pub mnemonic: &'static str,
    pub op: Opcode,
    pub mode0: bool,
}

pub const ALIASES: &[AliasDesc] = &[
    AliasDesc { mnemonic: "STORE", op: Opcode::Store, mode0: false },
    AliasDesc { mnemonic: "STORETOP", op: Opcode::Store, mode0: false },
    AliasDesc { mnemonic: "STOREBOT", op: Opcode::Store, mode0: true },
    AliasDesc { mnemonic: "FETCH", op: Opcode::Fetch, mode0: false },
    AliasDesc { mnemonic: "FETCHTOP", op: Opcode::Fetch, mode0: false },
    AliasDesc { mnemonic: "FETCHBOT", op: Opcode::Fetch, mode0: true },
    AliasDesc { mnemonic: "RUN", op: Opcode::Run, mode0: false },
    AliasDesc { mnemonic: "LOAD", op: Opcode::Load, mode0: false },
    AliasDesc { mnemonic: "LOADIN", op: Opcode::Load, mode0: false },
    AliasDesc { mnemonic: "LOADWEI", op: Opcode::Load, mode0: true },
    AliasDesc { mnemonic: "HALT", op: Opcode::Halt, mode0: false },
    AliasDesc { mnemonic: "NOP", op: Opcode::Nop, mode0: false },
];

pub fn resolve(mnemonic: &str) -> Option<&'static AliasDesc> {
    ALIASES.iter().find(|d| d.mnemonic == mnemonic)
}

/// Pack opcode, mode bits and address into one word. The address is masked
/// to 9 bits; bit 6 and undefined high bits stay zero.
pub fn pack(op: Opcode, modes: u16, addr: u16) -> u16 {
    op.code() | modes | ((addr & ADDR_MASK) << ADDR_SHIFT)
}

pub fn addr_of(word: u16) -> u16 {
    (word >> ADDR_SHIFT) & ADDR_MASK
}

pub fn mode0_of(word: u16) -> bool {
    word & MODE0 != 0
}

pub fn mode1_of(word: u16) -> bool {
    word & MODE1 != 0
}
