//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies the failure cases of the whole pipeline
//! (outbound HTTP, JSON decoding, the SQLite store and local file I/O), so that
//! every crate can propagate a single error type. `QuoteError::kind` folds the
//! variants into the coarse `ErrorKind` taxonomy exposed on the wire.
use std::io;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library, sockets or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Outbound HTTP request failed (transport, deadline or body read).
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote service answered with a non-success status code.
    #[error("Unexpected upstream status: {0}")]
    UpstreamStatus(u16),

    /// Upstream payload did not contain the requested currency pair.
    #[error("Currency pair not found in upstream payload: {0}")]
    MissingPair(String),

    /// The store could not be opened, prepared or written.
    #[error("Store error: {0}")]
    Store(String),

    /// The store write did not complete within its deadline.
    #[error("Store write exceeded deadline of {0:?}")]
    StoreTimeout(Duration),

    /// Bid text does not fit in the store column.
    #[error("Bid '{bid}' exceeds {max} characters")]
    BidTooLong {
        /// Offending bid text.
        bid: String,
        /// Column width.
        max: usize,
    },

    /// Quote server answered with a structured error body.
    #[error("Server responded {status} ({kind}): {message}")]
    Server {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error classification reported by the server.
        kind: ErrorKind,
        /// Human-readable message reported by the server.
        message: String,
    },

    /// A blocking task was cancelled or panicked.
    #[error("Background task failed: {0}")]
    Task(String),
}

/// Coarse classification of a `QuoteError`, shared on the wire in `ErrorBody`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// A remote call did not finish within its deadline.
    Timeout,
    /// A remote service could not be reached.
    Unavailable,
    /// A remote service answered with something we could not use.
    InvalidResponse,
    /// The local store rejected the write.
    Store,
    /// The local store did not finish the write within its deadline.
    StoreTimeout,
    /// Anything else: local I/O, task failures.
    Internal,
}

impl QuoteError {
    /// Classify the error for callers that only care about the failure class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuoteError::Http(e) if e.is_timeout() => ErrorKind::Timeout,
            QuoteError::Http(e) if e.is_status() || e.is_decode() => ErrorKind::InvalidResponse,
            QuoteError::Http(_) => ErrorKind::Unavailable,
            QuoteError::Json(_) | QuoteError::UpstreamStatus(_) | QuoteError::MissingPair(_) => {
                ErrorKind::InvalidResponse
            }
            QuoteError::Store(_) | QuoteError::BidTooLong { .. } => ErrorKind::Store,
            QuoteError::StoreTimeout(_) => ErrorKind::StoreTimeout,
            QuoteError::Server { kind, .. } => *kind,
            QuoteError::Io(_) | QuoteError::Task(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_is_an_invalid_response() {
        let err: QuoteError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
    }

    #[test]
    fn store_failures_keep_their_own_kinds() {
        assert_eq!(QuoteError::Store("locked".into()).kind(), ErrorKind::Store);
        assert_eq!(
            QuoteError::StoreTimeout(Duration::from_millis(10)).kind(),
            ErrorKind::StoreTimeout
        );
        let too_long = QuoteError::BidTooLong {
            bid: "12345678901".into(),
            max: 10,
        };
        assert_eq!(too_long.kind(), ErrorKind::Store);
    }

    #[test]
    fn server_error_reports_the_remote_kind() {
        let err = QuoteError::Server {
            status: 504,
            kind: ErrorKind::Timeout,
            message: "deadline".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Timeout);
    }

    #[test]
    fn kind_names_are_snake_case() {
        assert_eq!(ErrorKind::InvalidResponse.to_string(), "invalid_response");
        assert_eq!(ErrorKind::StoreTimeout.as_ref(), "store_timeout");
        assert_eq!(
            serde_json::to_string(&ErrorKind::StoreTimeout).unwrap(),
            "\"store_timeout\""
        );
        assert_eq!("timeout".parse::<ErrorKind>().unwrap(), ErrorKind::Timeout);
    }
}
