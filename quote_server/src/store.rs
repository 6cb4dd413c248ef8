//! SQLite-backed log of served quotes.
//!
//! The store is append-only: one row per successful request, never updated or
//! deleted. A connection is opened for every call and dropped right after, so
//! `QuoteStore` itself only carries the file path and the write deadline.
//!
//! The deadline bounds both the wait for the file lock (SQLite busy timeout)
//! and the insert itself. The insert runs inside a transaction that is only
//! committed if the deadline has not elapsed yet; otherwise it is rolled back,
//! so a timed-out write never leaves a row behind.
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::info;
use quote_common::{QuoteError, QuoteRecord, Result};
use rusqlite::{Connection, ErrorCode, params};

/// Width of the `cotacao` column.
pub const BID_MAX_LEN: usize = 10;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS cotacoes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cotacao VARCHAR(10)
)";

const INSERT_QUOTE: &str = "INSERT INTO cotacoes (cotacao) VALUES (?1)";

/// Handle describing where and how quotes are persisted.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    path: PathBuf,
    timeout: Duration,
}

impl QuoteStore {
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            timeout,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the store file and the `cotacoes` table if they are missing.
    ///
    /// Safe to call any number of times.
    pub fn ensure_schema(&self) -> Result<()> {
        self.open()?;
        info!("Quote store ready at {}", self.path.display());
        Ok(())
    }

    /// Append `bid` to the store and return the new record.
    pub fn insert(&self, bid: &str) -> Result<QuoteRecord> {
        if bid.chars().count() > BID_MAX_LEN {
            return Err(QuoteError::BidTooLong {
                bid: bid.to_string(),
                max: BID_MAX_LEN,
            });
        }

        let mut conn = self.open()?;
        let started = Instant::now();
        let tx = conn.transaction().map_err(|e| self.failure("begin", e))?;
        {
            let mut stmt = tx.prepare(INSERT_QUOTE).map_err(|e| self.failure("prepare", e))?;
            stmt.execute(params![bid]).map_err(|e| self.failure("insert", e))?;
        }
        let id = tx.last_insert_rowid();

        if started.elapsed() >= self.timeout {
            // Dropping the transaction rolls the insert back.
            return Err(QuoteError::StoreTimeout(self.timeout));
        }
        tx.commit().map_err(|e| self.failure("commit", e))?;

        Ok(QuoteRecord {
            id,
            bid: bid.to_string(),
        })
    }

    fn open(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path).map_err(|e| self.failure("open", e))?;
        conn.busy_timeout(self.timeout)
            .map_err(|e| self.failure("configure", e))?;
        conn.execute_batch(CREATE_TABLE)
            .map_err(|e| self.failure("create table", e))?;
        Ok(conn)
    }

    /// Fold a SQLite failure into the workspace error type.
    ///
    /// Lock contention that outlived the busy timeout counts as a deadline miss.
    /// Callers log the returned error.
    fn failure(&self, stage: &str, err: rusqlite::Error) -> QuoteError {
        match err.sqlite_error_code() {
            Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => {
                QuoteError::StoreTimeout(self.timeout)
            }
            _ => QuoteError::Store(format!("{} {}: {}", stage, self.path.display(), err)),
        }
    }
}

#[cfg(test)]
impl QuoteStore {
    /// All stored records, oldest first.
    pub(crate) fn records(&self) -> Result<Vec<QuoteRecord>> {
        let conn = self.open()?;
        let mut stmt = conn
            .prepare("SELECT id, cotacao FROM cotacoes ORDER BY id")
            .map_err(|e| self.failure("prepare", e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(QuoteRecord {
                    id: row.get(0)?,
                    bid: row.get(1)?,
                })
            })
            .map_err(|e| self.failure("select", e))?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| self.failure("select", e))
    }
}
