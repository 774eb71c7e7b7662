use pretty_assertions::assert_eq;
use utpu_rs::output::{hex_lines, words_from_le_bytes, words_to_le_bytes};
use utpu_rs::{assemble, disasm, AsmConfig};

const DEMO: &str = "\
; minimal inference sequence
STORE #0x1234, 0x80
LOADWEI 0x80
LOADIN 0
RUN CQR 0x100
FETCHTOP 0x100
HALT
";

fn demo_words() -> Vec<u16> {
    assemble(DEMO, &AsmConfig::default()).unwrap().words
}

#[test]
fn binary_pairs_reconstruct_the_hex_lines() {
    let words = demo_words();
    let decoded = words_from_le_bytes(&words_to_le_bytes(&words)).unwrap();
    assert_eq!(decoded, words);

    let from_hex: Vec<u16> = hex_lines(&words)
        .lines()
        .map(|l| u16::from_str_radix(l, 16).unwrap())
        .collect();
    assert_eq!(from_hex, words);
}

#[test]
fn disassembly_reassembles_to_the_same_words() {
    let words = demo_words();
    let text = disasm::disassemble(&words).join("\n");
    let again = assemble(&text, &AsmConfig::default()).unwrap();
    assert_eq!(again.words, words);
}

#[test]
fn store_disassembles_with_its_source_kind() {
    let words = assemble("STOREBOT #7, 3\nSTORE 10, 5\n", &AsmConfig::default())
        .unwrap()
        .words;
    let text = disasm::disassemble(&words);
    assert_eq!(text, vec!["storebot #0x7, 0x3", "storetop 0xa, 0x5"]);
}

#[test]
fn truncated_store_triple_degrades_to_raw_words() {
    // A lone STORE head word cannot form a triple; the unassigned opcode 7
    // behind it has no mnemonic either.
    let text = disasm::disassemble(&[0x0010, 0x0007]);
    assert_eq!(text, vec![".word 0x0010", ".word 0x0007"]);
}
