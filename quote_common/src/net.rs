//! Shared networking defaults used by client and server.
//!
//! Every value here is only a default: both binaries expose it as a CLI flag.

/// HTTP port the quote server listens on.
pub const SERVER_PORT: u16 = 8080;
/// Address the quote server binds to.
pub const SERVER_BIND: &str = "0.0.0.0";
/// Path of the quote endpoint.
pub const QUOTE_PATH: &str = "/cotacao";

/// Upstream exchange-rate endpoint.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// Key of the currency pair inside the upstream payload.
pub const UPSTREAM_PAIR: &str = "USDBRL";

/// Deadline for the upstream fetch, in milliseconds.
pub const FETCH_TIMEOUT_MS: u64 = 200;
/// Deadline for the store insert, in milliseconds.
pub const STORE_TIMEOUT_MS: u64 = 10;
/// Deadline for the client call to the server, in milliseconds.
pub const CLIENT_TIMEOUT_MS: u64 = 300;

/// SQLite file used by the server.
pub const DB_PATH: &str = "database.db";
/// Text file written by the client.
pub const OUTPUT_PATH: &str = "cotacao.txt";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Default URL of the quote endpoint as seen from the local machine.
pub fn quote_url(host: &str, port: u16) -> String {
    format!("http://{}{}", addr(host, port), QUOTE_PATH)
}
