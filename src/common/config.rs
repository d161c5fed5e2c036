use std::path::PathBuf;

use serde::Deserialize;

/// Simulator configuration, loaded from NONCE_SIM_* environment variables:
///
/// NONCE_SIM_LOG_DIRECTORY    directory audit logs are written to (default "logs")
/// NONCE_SIM_NETWORK_DELAY_MS simulated network latency in milliseconds (default 2000)
///
/// The log directory is an explicit setting rather than a hardcoded relative
/// path; whoever runs the simulator is responsible for creating it (the CLI
/// entry point does so on startup).
#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_log_directory")]
    pub log_directory: PathBuf,
    #[serde(default = "default_network_delay_ms")]
    pub network_delay_ms: u64,
}

fn default_log_directory() -> PathBuf {
    PathBuf::from("logs")
}

fn default_network_delay_ms() -> u64 {
    2_000
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            log_directory: default_log_directory(),
            network_delay_ms: default_network_delay_ms(),
        }
    }
}

impl SimulatorConfig {
    /// Load from the environment, or fall back to defaults on malformed input.
    pub fn from_env() -> Self {
        match envy::prefixed("NONCE_SIM_").from_env::<SimulatorConfig>() {
            Ok(cfg) => cfg,
            Err(err) => {
                // Avoid panicking on bad config; just log and fallback.
                tracing::warn!("failed to parse NONCE_SIM_* environment: {err}");
                SimulatorConfig::default()
            }
        }
    }
}
