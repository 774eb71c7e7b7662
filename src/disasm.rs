use crate::isa::utpu16::{self, Opcode, RunFlags};

/// Render an encoded word stream back to mnemonic text, one string per
/// instruction. STORE consumes three words; a truncated trailing triple and
/// unassigned opcodes render as raw `.word` values instead of failing.
pub fn disassemble(words: &[u16]) -> Vec<String> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let w = words[i];
        match Opcode::from_word(w) {
            Some(Opcode::Store) if i + 2 < words.len() => {
                out.push(fmt_store(w, words[i + 1], words[i + 2]));
                i += 3;
            }
            Some(Opcode::Store) | None => {
                out.push(format!(".word {w:#06x}"));
                i += 1;
            }
            Some(op) => {
                out.push(fmt_word(op, w));
                i += 1;
            }
        }
    }
    out
}

fn fmt_store(head: u16, source: u16, dest: u16) -> String {
    let mn = if utpu16::mode0_of(head) { "storebot" } else { "storetop" };
    if utpu16::mode1_of(head) {
        format!("{mn} {source:#x}, {dest:#x}")
    } else {
        format!("{mn} #{source:#x}, {dest:#x}")
    }
}

fn fmt_word(op: Opcode, w: u16) -> String {
    let addr = utpu16::addr_of(w);
    match op {
        Opcode::Fetch => {
            let mn = if utpu16::mode0_of(w) { "fetchbot" } else { "fetchtop" };
            format!("{mn} {addr:#x}")
        }
        Opcode::Load => {
            let mn = if utpu16::mode0_of(w) { "loadwei" } else { "loadin" };
            format!("{mn} {addr:#x}")
        }
        Opcode::Run => {
            let flags = RunFlags::from_bits_truncate(w);
            if flags.is_empty() {
                // No letter group can express an all-clear flag state.
                return format!(".word {w:#06x}");
            }
            let mut letters = String::new();
            if flags.contains(RunFlags::COMPUTE) {
                letters.push('c');
            }
            if flags.contains(RunFlags::QUANT) {
                letters.push('q');
            }
            if flags.contains(RunFlags::RELU) {
                letters.push('r');
            }
            format!("run {letters} {addr:#x}")
        }
        Opcode::Halt => "halt".to_string(),
        Opcode::Nop => "nop".to_string(),
        Opcode::Store => format!(".word {w:#06x}"),
    }
}
