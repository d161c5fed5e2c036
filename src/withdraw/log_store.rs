use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::models::TransactionRecord;

/// Fixed parts of the audit log filename:
/// `<prefix>_<YYYYMMDD_HHMMSS>.<extension>`.
pub const LOG_PREFIX: &str = "nonce_withdraw";
pub const LOG_EXTENSION: &str = "log";

/// Errors that can occur while persisting a transaction record.
#[derive(Debug)]
pub enum PersistError {
    /// The record could not be serialized to JSON.
    Serialize(String),
    /// The log file could not be written.
    Write(PathBuf, String),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Serialize(msg) => {
                write!(f, "failed to serialize transaction record: {}", msg)
            }
            PersistError::Write(path, msg) => {
                write!(f, "failed to write log file '{}': {}", path.display(), msg)
            }
        }
    }
}

impl std::error::Error for PersistError {}

/// Writes transaction records as 2-space-indented JSON, one file per record.
///
/// Precondition: `dir` exists. The store does not create it; the CLI entry
/// point (or the embedding test harness) is responsible for that. Filenames
/// carry a second-granularity stamp, so two writes within the same clock
/// second can collide; that limitation is accepted for a test harness.
pub struct LogStore {
    dir: PathBuf,
}

impl LogStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the record for `file_stamp` (compact `YYYYMMDD_HHMMSS`) lands at.
    pub fn log_path_for(&self, file_stamp: &str) -> PathBuf {
        self.dir
            .join(format!("{}_{}.{}", LOG_PREFIX, file_stamp, LOG_EXTENSION))
    }

    /// Persist `record` verbatim and return the path it was written to.
    pub fn write_record(
        &self,
        record: &TransactionRecord,
        file_stamp: &str,
    ) -> Result<PathBuf, PersistError> {
        let path = self.log_path_for(file_stamp);
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| PersistError::Serialize(e.to_string()))?;
        fs::write(&path, json).map_err(|e| PersistError::Write(path.clone(), e.to_string()))?;
        Ok(path)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
