//! Command-line arguments for the Quote Server.
//!
//! Every flag defaults to the value the service has always used, so running
//! the binary without arguments reproduces the stock behaviour.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::net::{
    DB_PATH, FETCH_TIMEOUT_MS, SERVER_BIND, SERVER_PORT, STORE_TIMEOUT_MS, UPSTREAM_PAIR,
    UPSTREAM_URL, addr,
};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to bind the HTTP listener to.
    #[clap(long, default_value = SERVER_BIND)]
    pub bind: String,

    /// Port to bind the HTTP listener to.
    #[clap(long, default_value_t = SERVER_PORT)]
    pub port: u16,

    /// Exchange-rate endpoint queried on every request.
    #[clap(long, default_value = UPSTREAM_URL)]
    pub upstream_url: String,

    /// Currency pair key inside the upstream payload.
    #[clap(long, default_value = UPSTREAM_PAIR)]
    pub pair: String,

    /// Deadline for the upstream call, in milliseconds.
    #[clap(long, default_value_t = FETCH_TIMEOUT_MS)]
    pub fetch_timeout_ms: u64,

    /// SQLite file where every served quote is recorded.
    #[clap(long, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Deadline for the store insert, in milliseconds.
    #[clap(long, default_value_t = STORE_TIMEOUT_MS)]
    pub store_timeout_ms: u64,
}

impl Args {
    /// Socket address string for the listener, like "0.0.0.0:8080".
    pub fn listen_addr(&self) -> String {
        addr(self.bind.trim(), self.port)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_service() {
        let args = Args::parse_from(["quote_server"]);
        assert_eq!(args.listen_addr(), "0.0.0.0:8080");
        assert_eq!(args.upstream_url, UPSTREAM_URL);
        assert_eq!(args.pair, "USDBRL");
        assert_eq!(args.fetch_timeout(), Duration::from_millis(200));
        assert_eq!(args.store_timeout(), Duration::from_millis(10));
        assert_eq!(args.db_path, PathBuf::from("database.db"));
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "quote_server",
            "--bind",
            "127.0.0.1",
            "--port",
            "9090",
            "--fetch-timeout-ms",
            "500",
            "--db-path",
            "/tmp/quotes.db",
        ]);
        assert_eq!(args.listen_addr(), "127.0.0.1:9090");
        assert_eq!(args.fetch_timeout(), Duration::from_millis(500));
        assert_eq!(args.db_path, PathBuf::from("/tmp/quotes.db"));
    }
}
