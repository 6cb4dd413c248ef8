//! Quote HTTP server.
//!
//! This binary exposes a single endpoint, `GET /cotacao`, that returns the
//! current USD→BRL bid. Internally, it wires together three building blocks:
//!
//! - `QuoteFetcher` — one deadline-bounded GET to the exchange-rate API,
//!   decoding the bid as text.
//! - `QuoteStore` — an append-only SQLite table receiving one row per served
//!   quote, written under its own short deadline.
//! - `routes` — the axum router sequencing fetch → store → JSON response and
//!   turning any failure into a structured error reply.
//!
//! Lifecycle:
//! - The store schema is created (idempotently) before the listener is bound.
//! - Ctrl+C stops accepting connections and lets in-flight requests finish.
//!
//! Every literal the service depends on (port, upstream URL, deadlines, store
//! path) can be overridden on the command line; see `args`.
#![warn(missing_docs)]
use clap::Parser;
use log::{error, info};
use quote_common::Result;
use tokio::net::TcpListener;

use crate::args::Args;
use crate::fetcher::QuoteFetcher;
use crate::routes::AppState;
use crate::store::QuoteStore;

mod args;
mod fetcher;
mod routes;
mod store;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let store = QuoteStore::new(&args.db_path, args.store_timeout());
    store
        .ensure_schema()
        .inspect_err(|e| error!("Cannot prepare quote store: {}", e))?;
    let fetcher = QuoteFetcher::new(&args.upstream_url, &args.pair, args.fetch_timeout())?;
    info!(
        "Quoting {} from {} (fetch deadline {:?}, store deadline {:?})",
        args.pair,
        args.upstream_url,
        args.fetch_timeout(),
        args.store_timeout()
    );

    let app = routes::router(AppState { fetcher, store });
    let listener = TcpListener::bind(args.listen_addr()).await?;
    info!("Quote server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
