//! Command-line arguments for the rate client.
//!
//! Every flag defaults to the fixed value in `rate_common::net`.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rate_common::net::{LOCAL_QUOTE_URL, OUTPUT_FILE, REQUEST_DEADLINE_MS};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Local quote endpoint.
    #[clap(long, default_value = LOCAL_QUOTE_URL)]
    pub url: String,

    /// File the quote is written to (created or truncated).
    #[clap(long, default_value = OUTPUT_FILE)]
    pub output: String,

    /// Request deadline in milliseconds.
    #[clap(long, default_value_t = REQUEST_DEADLINE_MS)]
    pub timeout_ms: u64,
}

impl Args {
    /// Request deadline.
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Output path with surrounding whitespace and quotes removed.
    pub fn output_path(&self) -> PathBuf {
        normalize_path(&self.output)
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
