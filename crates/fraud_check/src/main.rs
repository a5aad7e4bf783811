// Rust guideline compliant 2026-10-16

//! Fraud-check entry point.
//!
//! Wires a form session (Input Collector + Submission Controller) to either
//! the HTTP prediction adapter or the offline DEMO adapter and exposes it on
//! the command line.
//!
//! # Usage
//!
//! ```text
//! # One transaction against a running service
//! cargo run -- check --amount 120.50 --customer-age 34 --hour 13 \
//!     --transaction-type purchase --merchant-category grocery \
//!     --card-type debit --country kenya --device web
//!
//! # Offline, prompting for each field
//! cargo run -- --demo interactive
//!
//! # Show request lifecycle logs
//! RUST_LOG=debug cargo run -- --demo interactive
//! ```

mod adapters;
mod cli;
mod config;
mod telemetry;

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    cli::run().await
}
