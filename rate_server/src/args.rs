//! Command-line arguments for the rate server.
//!
//! Every flag defaults to the fixed value in `rate_common::net`.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rate_common::net::{
    DB_PATH, FETCH_DEADLINE_MS, SERVER_PORT, STORE_DEADLINE_MS, UPSTREAM_URL,
};

/// Parsed command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Port the local quote endpoint listens on.
    #[clap(long, default_value_t = SERVER_PORT)]
    pub port: u16,

    /// SQLite file holding the quote ledger.
    #[clap(long, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Upstream exchange-rate API.
    #[clap(long, default_value = UPSTREAM_URL)]
    pub upstream_url: String,

    /// Upstream fetch deadline in milliseconds.
    #[clap(long, default_value_t = FETCH_DEADLINE_MS)]
    pub fetch_timeout_ms: u64,

    /// Ledger insert deadline in milliseconds.
    #[clap(long, default_value_t = STORE_DEADLINE_MS)]
    pub store_timeout_ms: u64,
}

impl Args {
    /// Upstream fetch deadline.
    pub fn fetch_deadline(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Ledger insert deadline.
    pub fn store_deadline(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}
