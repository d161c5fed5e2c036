use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use solana_nonce_sim::common::SimulatorConfig;
use solana_nonce_sim::withdraw::{simulate_withdrawal, SimulationResult};

/// Simulate a Solana nonce-account withdrawal without touching the network.
#[derive(Parser, Debug)]
#[command(name = "solana-nonce-sim", version, about)]
struct Cli {
    /// Nonce account address
    #[arg(long)]
    nonce: String,

    /// Recipient address
    #[arg(long)]
    recipient: String,

    /// Path to the authority keypair file
    #[arg(long)]
    authority: PathBuf,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = SimulatorConfig::from_env();

    fs::create_dir_all(&config.log_directory).with_context(|| {
        format!(
            "could not create log directory '{}'",
            config.log_directory.display()
        )
    })?;

    if cli.verbose {
        println!("Nonce Account: {}", cli.nonce);
        println!("Recipient: {}", cli.recipient);
        println!("Authority: {}", cli.authority.display());
        println!("Simulating transaction processing...");
    }

    let result = simulate_withdrawal(&config, &cli.nonce, &cli.recipient, &cli.authority)
        .context("withdrawal simulation aborted while writing the audit log")?;

    match result {
        SimulationResult::Completed(receipt) => {
            println!("{}", "Withdrawal simulation successful!".green());
            println!("Transaction Signature: {}", receipt.signature);
            println!("Log saved to: {}", receipt.log_file);

            // The signature is synthetic, so these links will never resolve to
            // a real transaction. Printed anyway so downstream tooling that
            // scrapes the summary sees the usual shape.
            println!("\nView transaction on explorers:");
            println!(
                "• Solana Explorer: https://explorer.solana.com/tx/{}",
                receipt.signature
            );
            println!("• Solscan: https://solscan.io/tx/{}", receipt.signature);
        }
        SimulationResult::Rejected(rejection) => {
            eprintln!(
                "{} {}",
                "Withdrawal simulation failed:".red(),
                rejection.error
            );
            process::exit(1);
        }
    }

    Ok(())
}
