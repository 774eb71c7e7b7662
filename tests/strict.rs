use utpu_rs::{encode_line, AsmConfig, AsmError, Encoded};

const STRICT: AsmConfig = AsmConfig {
    strict_numerals: true,
};

fn bad(line: &str, token: &str) {
    assert_eq!(
        encode_line(line, 1, &STRICT),
        Err(AsmError::BadNumeral {
            line: 1,
            token: token.to_string(),
        })
    );
}

#[test]
fn strict_rejects_what_permissive_masks() {
    bad("FETCH 512", "512");
    bad("FETCH zzz", "zzz");
    bad("RUN 0xQQQ", "0xQQQ");
    bad("STORE #70000, 1", "70000");
    bad("STORE #-1, 0", "-1");
    bad("STORE 1, 999", "999");
}

#[test]
fn strict_accepts_in_range_values() {
    assert_eq!(
        encode_line("FETCH 511", 1, &STRICT).unwrap(),
        Encoded::Single(0xFF81)
    );
    assert_eq!(
        encode_line("STORE #0xFFFF, 0", 1, &STRICT).unwrap(),
        Encoded::Triple([0x0000, 0xFFFF, 0])
    );
}

#[test]
fn permissive_mode_never_rejects_numerals() {
    let cfg = AsmConfig::default();
    // Malformed tokens evaluate to 0, oversized ones are masked.
    assert_eq!(
        encode_line("FETCH zzz", 1, &cfg).unwrap(),
        Encoded::Single(0x0001)
    );
    assert_eq!(
        encode_line("FETCH 512", 1, &cfg).unwrap(),
        Encoded::Single(0x0001)
    );
    assert_eq!(
        encode_line("STORE #70000, 1", 1, &cfg).unwrap(),
        Encoded::Triple([0x0000, 70000u32 as u16, 1])
    );
}
