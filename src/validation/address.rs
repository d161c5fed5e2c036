use std::collections::HashSet;

use once_cell::sync::Lazy;

/// The 58-symbol alphabet used by base58 encodings on Solana.
/// Excludes `0`, `O`, `I` and `l` to avoid visually ambiguous characters.
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Membership set derived from [`BASE58_ALPHABET`].
static BASE58_CHARS: Lazy<HashSet<char>> = Lazy::new(|| BASE58_ALPHABET.chars().collect());

/// Returns true when `address` looks like a Solana public key: 32-44
/// characters, all drawn from the base58 alphabet.
///
/// This is a format check only; it says nothing about whether the account
/// exists on any cluster.
pub fn is_valid_address(address: &str) -> bool {
    if address.len() < 32 || address.len() > 44 {
        return false;
    }
    address.chars().all(|c| BASE58_CHARS.contains(&c))
}
