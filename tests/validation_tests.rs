//! Tests for the shape-only input validators: address format window and
//! alphabet, plus the keypair file checks and their tagged error reasons.

use std::fs;

use solana_nonce_sim::validation::{
    check_keypair_file, is_valid_address, is_valid_keypair_file, KeypairFileError,
};

#[test]
fn address_length_window_is_32_to_44() {
    assert!(!is_valid_address(""));
    assert!(!is_valid_address(&"A".repeat(31)));
    assert!(is_valid_address(&"A".repeat(32)));
    assert!(is_valid_address(&"A".repeat(44)));
    assert!(!is_valid_address(&"A".repeat(45)));
}

#[test]
fn realistic_pubkeys_pass() {
    assert!(is_valid_address("2Lp2SGS9AKYVKCrizjzJLPHn4swatnbvEQ2UB2bKorJy"));
    assert!(is_valid_address("C8QHPhGa8YGCmDysmHZVpYSLKFa7Gb75kAfQWAGztvJ1"));
}

#[test]
fn ambiguous_base58_characters_are_rejected() {
    // 0, O, I and l are not part of the base58 alphabet.
    for bad in ['0', 'O', 'I', 'l'] {
        let mut addr = "A".repeat(40);
        addr.replace_range(10..11, &bad.to_string());
        assert!(!is_valid_address(&addr), "address with '{}' passed", bad);
    }
}

#[test]
fn one_disallowed_character_anywhere_rejects() {
    let base = "A".repeat(36);
    for pos in [0, 17, 35] {
        let mut addr = base.clone();
        addr.replace_range(pos..pos + 1, "!");
        assert!(!is_valid_address(&addr));
    }
}

#[test]
fn missing_keypair_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no-such-keypair.json");

    assert!(matches!(
        check_keypair_file(&path),
        Err(KeypairFileError::NotFound(p)) if p == path
    ));
    assert!(!is_valid_keypair_file(&path));
}

#[test]
fn non_json_keypair_file_is_invalid_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("keypair.json");
    fs::write(&path, "not json at all {{").expect("write");

    assert!(matches!(
        check_keypair_file(&path),
        Err(KeypairFileError::InvalidJson(_))
    ));
    assert!(!is_valid_keypair_file(&path));
}

#[test]
fn json_object_keypair_file_is_not_an_array() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("keypair.json");
    fs::write(&path, r#"{"not":"an array"}"#).expect("write");

    assert!(matches!(
        check_keypair_file(&path),
        Err(KeypairFileError::NotAnArray)
    ));
    assert!(!is_valid_keypair_file(&path));
}

#[test]
fn array_keypair_file_passes_regardless_of_contents() {
    let dir = tempfile::tempdir().expect("tempdir");

    // Element types and array length are deliberately not checked.
    for (name, contents) in [
        ("empty.json", "[]"),
        ("bytes.json", "[174, 47, 255, 0, 12]"),
        ("mixed.json", r#"[1, "two", null, [3]]"#),
    ] {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write");
        assert!(check_keypair_file(&path).is_ok(), "{} rejected", name);
        assert!(is_valid_keypair_file(&path));
    }
}
