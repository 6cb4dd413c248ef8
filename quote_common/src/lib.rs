//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` and its `ErrorKind` taxonomy.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — upstream rate, quote, stored record and wire payloads.
//! - `net` — networking defaults and small helpers.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod quote;
pub mod result;

pub use error::{ErrorKind, QuoteError};
pub use quote::{ErrorBody, ExchangeRate, Quote, QuoteRecord, QuoteResponse};
pub use result::Result;
