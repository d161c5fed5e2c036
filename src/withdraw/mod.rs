//! Withdrawal simulation orchestration.
//!
//! The sequence per call is fixed: validate the nonce account, the recipient
//! and the authority keypair file in that order (first failure wins), sleep
//! for the configured artificial latency, synthesize a signature, persist the
//! audit record, report. Validation failures come back as a structured
//! [`SimulationResult`]; a persistence failure is a distinct fault
//! ([`PersistError`]) so callers can tell "bad input" from "could not write
//! the log".

pub mod log_store;
pub mod models;

pub use log_store::{LogStore, PersistError, LOG_EXTENSION, LOG_PREFIX};
pub use models::{
    SimulationResult, TransactionRecord, WithdrawalReceipt, WithdrawalRejection,
    ERR_INVALID_AUTHORITY, ERR_INVALID_NONCE_ACCOUNT, ERR_INVALID_RECIPIENT,
};

use std::path::Path;
use std::thread;
use std::time::Duration;

use chrono::Local;
use tracing::{debug, info};

use crate::common::SimulatorConfig;
use crate::signature::synthesize_signature;
use crate::validation::{is_valid_address, is_valid_keypair_file};

/// Record timestamp format, also embedded in the persisted JSON.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Compact stamp used in log filenames.
pub const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Simulate one nonce-account withdrawal.
///
/// Returns `Ok` with either a receipt or a rejection; `Err` only when all
/// inputs validated but the audit log could not be written.
pub fn simulate_withdrawal(
    config: &SimulatorConfig,
    nonce_account: &str,
    recipient: &str,
    authority_path: &Path,
) -> Result<SimulationResult, PersistError> {
    // One clock read per call: the record timestamp and the log filename
    // stamp must agree.
    let now = Local::now();
    let timestamp = now.format(TIMESTAMP_FORMAT).to_string();

    if !is_valid_address(nonce_account) {
        return Ok(SimulationResult::rejected(ERR_INVALID_NONCE_ACCOUNT, timestamp));
    }
    if !is_valid_address(recipient) {
        return Ok(SimulationResult::rejected(ERR_INVALID_RECIPIENT, timestamp));
    }
    if !is_valid_keypair_file(authority_path) {
        return Ok(SimulationResult::rejected(ERR_INVALID_AUTHORITY, timestamp));
    }

    debug!(
        "inputs valid, simulating {}ms of network latency",
        config.network_delay_ms
    );
    thread::sleep(Duration::from_millis(config.network_delay_ms));

    let signature = synthesize_signature();

    let record = TransactionRecord {
        nonce_account: nonce_account.to_string(),
        recipient: recipient.to_string(),
        authority: authority_path.display().to_string(),
        signature: signature.clone(),
        timestamp: timestamp.clone(),
        success: true,
    };

    let store = LogStore::new(&config.log_directory);
    let log_file = store.write_record(&record, &now.format(FILE_STAMP_FORMAT).to_string())?;

    info!(
        "withdrawal simulated: signature={} log_file={}",
        signature,
        log_file.display()
    );

    Ok(SimulationResult::completed(
        signature,
        log_file.display().to_string(),
        timestamp,
    ))
}
