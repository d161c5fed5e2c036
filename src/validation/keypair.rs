use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Errors that can occur while checking a local keypair file.
#[derive(Debug)]
pub enum KeypairFileError {
    /// The path does not reference an existing file.
    NotFound(PathBuf),
    /// The file content is not syntactically valid JSON.
    InvalidJson(String),
    /// The top-level JSON value is not an array.
    NotAnArray,
    /// Any other read failure (permissions, device errors).
    Io(String),
}

impl fmt::Display for KeypairFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeypairFileError::NotFound(path) => {
                write!(f, "Keypair file '{}' not found", path.display())
            }
            KeypairFileError::InvalidJson(msg) => {
                write!(f, "Keypair file is not valid JSON: {}", msg)
            }
            KeypairFileError::NotAnArray => {
                write!(f, "Keypair file does not contain a valid key array")
            }
            KeypairFileError::Io(msg) => write!(f, "Error reading keypair file: {}", msg),
        }
    }
}

impl std::error::Error for KeypairFileError {}

/// Checks that `path` exists and holds a JSON array.
///
/// Element types and array length are deliberately not inspected; the file is
/// never used for signing, so only the overall shape matters here.
pub fn check_keypair_file(path: &Path) -> Result<(), KeypairFileError> {
    if !path.exists() {
        return Err(KeypairFileError::NotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(|e| KeypairFileError::Io(e.to_string()))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| KeypairFileError::InvalidJson(e.to_string()))?;

    if !value.is_array() {
        return Err(KeypairFileError::NotAnArray);
    }

    Ok(())
}

/// Boolean collapse of [`check_keypair_file`] for the withdrawal orchestrator.
/// The specific failure reason is emitted as a diagnostic before it is lost.
pub fn is_valid_keypair_file(path: &Path) -> bool {
    match check_keypair_file(path) {
        Ok(()) => true,
        Err(err) => {
            warn!("keypair validation failed for '{}': {}", path.display(), err);
            false
        }
    }
}
