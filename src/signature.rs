//! Synthetic transaction signatures.
//!
//! Real Solana signatures are 64-byte ed25519 signatures rendered as 88ish
//! base58 characters. This module produces strings of the same shape without
//! any signing: 32 random bytes are base64-encoded and then rewritten into
//! the base58 alphabet, padding with random characters up to the typical
//! signature length. The output is a plausible-looking identifier, nothing
//! more.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::validation::BASE58_ALPHABET;

/// Typical rendered length of a Solana transaction signature.
pub const SIGNATURE_LEN: usize = 88;

/// Rewrite phase for [`pseudo_base58`]: leading rejected characters are
/// dropped outright, everything after the first kept character is
/// substituted instead.
#[derive(Clone, Copy, PartialEq)]
enum Phase {
    SkippingPrefix,
    Substituting,
}

/// Generate a simulated transaction signature: exactly 88 characters, each
/// drawn from the base58 alphabet. Repeated calls are independent.
pub fn synthesize_signature() -> String {
    let mut seed = [0u8; 32];
    OsRng.fill_bytes(&mut seed);

    let mut signature = pseudo_base58(&seed);

    let mut rng = rand::thread_rng();
    while signature.len() < SIGNATURE_LEN {
        signature.push(random_alphabet_char(&mut rng));
    }
    signature.truncate(SIGNATURE_LEN);
    signature
}

/// Lossy base58-flavored rendering of `data`.
///
/// The bytes are base64-encoded first, then each intermediate character is
/// kept if it already belongs to the base58 alphabet. Characters outside the
/// alphabet are dropped while no character has been kept yet, and replaced
/// with a uniformly random alphabet character afterwards. This is not a
/// base58 codec; the result cannot be decoded back to `data`.
pub fn pseudo_base58(data: &[u8]) -> String {
    let intermediate = base64::encode(data);
    let mut rng = rand::thread_rng();

    let mut phase = Phase::SkippingPrefix;
    let mut out = String::with_capacity(intermediate.len());
    for c in intermediate.chars() {
        if c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l') {
            out.push(c);
            phase = Phase::Substituting;
        } else if phase == Phase::Substituting {
            out.push(random_alphabet_char(&mut rng));
        }
    }
    out
}

fn random_alphabet_char<R: Rng>(rng: &mut R) -> char {
    // The alphabet is a non-empty const, so choose() cannot fail.
    *BASE58_ALPHABET.as_bytes().choose(rng).unwrap() as char
}
