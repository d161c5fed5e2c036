//! Offline simulator for Solana nonce-account withdrawals.
//!
//! Nothing here touches a real network or performs genuine signing: the crate
//! validates the shape of two addresses and a local keypair file, synthesizes
//! a plausible-looking transaction signature, and persists a JSON audit log.
//! Intended as a test harness for automation that needs realistic-looking
//! but non-authoritative transaction artifacts.

pub mod common;
pub mod signature;
pub mod validation;
pub mod withdraw;
