use serde::{Deserialize, Serialize};

/// Stable rejection messages; exactly one of these is reported per call.
pub const ERR_INVALID_NONCE_ACCOUNT: &str = "Invalid nonce account address format";
pub const ERR_INVALID_RECIPIENT: &str = "Invalid recipient address format";
pub const ERR_INVALID_AUTHORITY: &str = "Invalid authority keypair file";

/// Audit record persisted for each simulated withdrawal, one file per call.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub nonce_account: String,
    pub recipient: String,
    /// Path to the authority keypair file. The path is recorded, never the
    /// key material.
    pub authority: String,
    pub signature: String,
    /// Wall-clock time of the simulation, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    pub success: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WithdrawalReceipt {
    pub success: bool,
    pub signature: String,
    pub log_file: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WithdrawalRejection {
    pub success: bool,
    pub error: String,
    pub timestamp: String,
}

/// Outcome of one simulated withdrawal: either a receipt with the synthetic
/// signature and log location, or a rejection with one stable error message.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SimulationResult {
    Completed(WithdrawalReceipt),
    Rejected(WithdrawalRejection),
}

impl SimulationResult {
    pub fn completed(signature: String, log_file: String, timestamp: String) -> Self {
        SimulationResult::Completed(WithdrawalReceipt {
            success: true,
            signature,
            log_file,
            timestamp,
        })
    }

    pub fn rejected(error: &str, timestamp: String) -> Self {
        SimulationResult::Rejected(WithdrawalRejection {
            success: false,
            error: error.to_string(),
            timestamp,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SimulationResult::Completed(_))
    }

    pub fn signature(&self) -> Option<&str> {
        match self {
            SimulationResult::Completed(r) => Some(&r.signature),
            SimulationResult::Rejected(_) => None,
        }
    }

    pub fn log_file(&self) -> Option<&str> {
        match self {
            SimulationResult::Completed(r) => Some(&r.log_file),
            SimulationResult::Rejected(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SimulationResult::Completed(_) => None,
            SimulationResult::Rejected(r) => Some(&r.error),
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            SimulationResult::Completed(r) => &r.timestamp,
            SimulationResult::Rejected(r) => &r.timestamp,
        }
    }
}
