//! Error types shared between client and server.
//!
//! Every failure in the fetch, persist, respond and request pipeline ends up as
//! one `RateError`. None of them is recovered from: the current request (server)
//! or run (client) is aborted at the point the error is reported.
use std::io;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum RateError {
    /// Network or connection failure on an outbound HTTP call.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A bounded call (upstream fetch, ledger insert, local request) ran past its deadline.
    #[error("Deadline exceeded: {0}")]
    Timeout(String),

    /// Payload was not valid JSON or did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Ledger handle could not be opened, or the table/prepare/insert step failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for RateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RateError::Timeout(err.to_string())
        } else {
            RateError::Transport(err.to_string())
        }
    }
}

impl RateError {
    /// True for the `Timeout` variant.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RateError::Timeout(_))
    }
}
