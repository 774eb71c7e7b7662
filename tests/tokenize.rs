use utpu_rs::tokenizer::tokenize;

#[test]
fn blank_and_comment_lines_are_content_free() {
    assert!(tokenize("").is_none());
    assert!(tokenize("   \t  ").is_none());
    assert!(tokenize("# full line comment").is_none());
    assert!(tokenize("   # indented comment").is_none());
    assert!(tokenize("; semicolon comment").is_none());
    assert!(tokenize("  ; also a comment").is_none());
    assert!(tokenize(",,,").is_none());
}

#[test]
fn semicolon_cuts_inline() {
    let t = tokenize("FETCH 0x10 ; grab the result").unwrap();
    assert_eq!(t.mnemonic, "FETCH");
    assert_eq!(t.operands, vec!["0x10"]);
}

#[test]
fn splits_on_spaces_tabs_and_commas() {
    let t = tokenize("STORE\t#7 ,  3").unwrap();
    assert_eq!(t.mnemonic, "STORE");
    assert_eq!(t.operands, vec!["#7", "3"]);
}

#[test]
fn mnemonic_case_is_normalized_but_remembered() {
    let t = tokenize("loadWei 0x80").unwrap();
    assert_eq!(t.mnemonic, "LOADWEI");
    assert_eq!(t.raw_mnemonic, "loadWei");
}

#[test]
fn immediate_sigil_survives_mid_line() {
    let t = tokenize("STOREBOT #7, 3").unwrap();
    assert_eq!(t.operands, vec!["#7", "3"]);
}
