//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::net::{CLIENT_TIMEOUT_MS, OUTPUT_PATH, SERVER_PORT, quote_url};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Quote endpoint of the server.
    #[clap(long, default_value_t = quote_url("localhost", SERVER_PORT))]
    pub url: String,

    /// Deadline for the whole request, in milliseconds.
    #[clap(long, default_value_t = CLIENT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// File the quote line is written to. Overwritten on every run.
    #[clap(long, default_value = OUTPUT_PATH)]
    pub output: PathBuf,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
