pub mod config;

pub use config::SimulatorConfig;
