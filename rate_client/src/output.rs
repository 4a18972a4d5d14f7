//! Writes the received quote to the local text file.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use rate_common::{QuoteSummary, Result};

/// Create or truncate `path` and write `Dólar: <bid>` to it.
pub fn persist_to_file(summary: &QuoteSummary, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(summary.file_line().as_bytes())?;
    Ok(())
}
