//! Quote Client — asks the quote server for the current USD→BRL bid and writes
//! it to a local text file as a single `Dolar: {<bid>}` line.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --url http://localhost:8080/cotacao --timeout-ms 300 --output ./cotacao.txt
//! ```
//!
//! Any failure (network, deadline, decoding, file I/O) stops the program with a
//! non-zero exit status; the output file is only trusted when the byte count is
//! printed.
#![warn(missing_docs)]
mod args;
mod fetcher;
mod writer;

use crate::args::Args;
use crate::fetcher::fetch_quote;
use crate::writer::write_quote_file;
use clap::Parser;
use log::{error, info};
use quote_common::Result;

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let quote = fetch_quote(&args.url, args.timeout())
        .inspect_err(|e| error!("Failed to get quote ({}): {}", e.kind(), e))?;
    info!("Dolar bid: {}", quote.bid);

    let written = write_quote_file(&args.output, &quote.bid)
        .inspect_err(|e| error!("Failed to write {}: {}", args.output.display(), e))?;
    println!(
        "File {} written successfully. Size: {} bytes",
        args.output.display(),
        written
    );
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
