//!
//! Common types and utilities shared by the rate server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `RateError` used across the workspace.
//! - `result` — handy `Result<T, RateError>` alias.
//! - `summary` — the `QuoteSummary` payload exchanged over the local endpoint.
//! - `net` — fixed endpoints, deadlines and file names.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod result;
pub mod summary;

pub use error::RateError;
pub use result::Result;
pub use summary::QuoteSummary;
