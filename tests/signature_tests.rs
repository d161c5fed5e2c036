//! Tests for the synthetic signature generator and the lossy pseudo-base58
//! rewrite it is built on.

use solana_nonce_sim::signature::{pseudo_base58, synthesize_signature, SIGNATURE_LEN};
use solana_nonce_sim::validation::BASE58_ALPHABET;

fn all_in_alphabet(s: &str) -> bool {
    s.chars().all(|c| BASE58_ALPHABET.contains(c))
}

#[test]
fn signature_is_88_alphabet_characters() {
    let sig = synthesize_signature();
    assert_eq!(sig.len(), SIGNATURE_LEN);
    assert!(all_in_alphabet(&sig), "unexpected character in {}", sig);
}

#[test]
fn repeated_signatures_are_distinct() {
    // 32 random input bytes make a collision astronomically unlikely.
    let a = synthesize_signature();
    let b = synthesize_signature();
    assert_ne!(a, b);
}

#[test]
fn pseudo_base58_keeps_alphabet_characters_verbatim() {
    // base64("Ma") == "TWE=": three kept characters, one substituted pad.
    let out = pseudo_base58(b"Ma");
    assert_eq!(out.len(), 4);
    assert!(out.starts_with("TWE"));
    assert!(all_in_alphabet(&out));
}

#[test]
fn pseudo_base58_drops_rejected_prefix_without_placeholder() {
    // base64([0xFB]) == "+w==": the leading '+' is skipped outright, 'w' is
    // kept, and the two pads are substituted after the first keep.
    let out = pseudo_base58(&[0xFB]);
    assert_eq!(out.len(), 3);
    assert!(out.starts_with('w'));
    assert!(all_in_alphabet(&out));

    // base64([0xFF, 0xFF]) == "//8=": two skipped, '8' kept, one substituted.
    let out = pseudo_base58(&[0xFF, 0xFF]);
    assert_eq!(out.len(), 2);
    assert!(out.starts_with('8'));
    assert!(all_in_alphabet(&out));
}

#[test]
fn pseudo_base58_of_fully_rejected_input_is_empty() {
    // base64([0xD3, 0x4D, 0x34]) == "0000": every character is rejected while
    // still in the skip phase, so nothing is emitted.
    assert_eq!(pseudo_base58(&[0xD3, 0x4D, 0x34]), "");
}

#[test]
fn empty_input_yields_empty_rewrite() {
    assert_eq!(pseudo_base58(&[]), "");
}
