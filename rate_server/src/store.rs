//! Local quote store: the append-only SQLite ledger.
//!
//! Every `persist` call opens its own handle, ensures the table exists and
//! inserts exactly one row. The handle and the prepared statement are dropped
//! on every exit path. A deadline starts when `persist` is entered; once it
//! elapses SQLite's progress handler interrupts whatever statement is running,
//! and an interrupted insert leaves no row behind.
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::debug;
use rate_common::net::TABLE_NAME;
use rate_common::{RateError, Result};
use rusqlite::{Connection, ErrorCode, OpenFlags, OptionalExtension, Row, params};

use crate::model::quote::ExchangeQuote;

/// VM instructions between deadline checks.
const PROGRESS_OPS: i32 = 100;

/// A ledger row: the upstream fields plus the auto-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedQuoteRecord {
    /// Auto-increment identifier.
    pub id: i64,
    /// The stored observation.
    pub quote: ExchangeQuote,
}

/// Handle-per-call access to the ledger file at `path`.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    path: PathBuf,
}

impl QuoteStore {
    /// Creates a store backed by the SQLite file at `path`. Nothing is opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ledger file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `quote` to the ledger within `deadline`, returning the new row id.
    pub fn persist(&self, quote: &ExchangeQuote, deadline: Duration) -> Result<i64> {
        let expires_at = Instant::now() + deadline;
        let conn = Connection::open(&self.path).map_err(storage_error)?;
        conn.busy_timeout(deadline).map_err(storage_error)?;
        conn.progress_handler(PROGRESS_OPS, Some(move || Instant::now() >= expires_at));

        conn.execute(&create_table_sql(), [])
            .map_err(storage_error)?;

        let mut stmt = conn.prepare(&insert_sql()).map_err(storage_error)?;
        if Instant::now() >= expires_at {
            return Err(RateError::Timeout(format!(
                "ledger insert not started within {:?}",
                deadline
            )));
        }
        stmt.execute(params![
            quote.code,
            quote.codein,
            quote.name,
            quote.high,
            quote.low,
            quote.var_bid,
            quote.pct_change,
            quote.bid,
            quote.ask,
            quote.timestamp,
            quote.create_date,
        ])
        .map_err(storage_error)?;

        let id = conn.last_insert_rowid();
        debug!("Inserted ledger row {} into {}", id, self.path.display());
        Ok(id)
    }

    /// Most recently inserted row, or `None` when the ledger is empty or absent.
    pub fn latest(&self) -> Result<Option<PersistedQuoteRecord>> {
        let Some(conn) = self.open_read_only()? else {
            return Ok(None);
        };
        let sql = format!(
            "SELECT id, code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp, createDate \
             FROM {TABLE_NAME} ORDER BY id DESC LIMIT 1"
        );
        conn.query_row(&sql, [], record_from_row)
            .optional()
            .map_err(storage_error)
    }

    /// Number of rows in the ledger; zero when the file or table does not exist yet.
    pub fn count(&self) -> Result<u64> {
        let Some(conn) = self.open_read_only()? else {
            return Ok(0);
        };
        let sql = format!("SELECT COUNT(*) FROM {TABLE_NAME}");
        let count: i64 = conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(storage_error)?;
        Ok(count as u64)
    }

    /// Read-only handle, or `None` when there is no ledger file or table yet.
    /// Never creates the file.
    fn open_read_only(&self) -> Result<Option<Connection>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(storage_error)?;
        if !table_exists(&conn)? {
            return Ok(None);
        }
        Ok(Some(conn))
    }
}

fn create_table_sql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {TABLE_NAME} (\
         id INTEGER PRIMARY KEY AUTOINCREMENT, code TEXT, codein TEXT, name TEXT, \
         high TEXT, low TEXT, varBid TEXT, pctChange TEXT, bid TEXT, ask TEXT, \
         timestamp TEXT, createDate TEXT)"
    )
}

fn insert_sql() -> String {
    format!(
        "INSERT INTO {TABLE_NAME} \
         (code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp, createDate) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"
    )
}

fn table_exists(conn: &Connection) -> Result<bool> {
    conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [TABLE_NAME],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
    .map_err(storage_error)
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<PersistedQuoteRecord> {
    Ok(PersistedQuoteRecord {
        id: row.get(0)?,
        quote: ExchangeQuote {
            code: row.get(1)?,
            codein: row.get(2)?,
            name: row.get(3)?,
            high: row.get(4)?,
            low: row.get(5)?,
            var_bid: row.get(6)?,
            pct_change: row.get(7)?,
            bid: row.get(8)?,
            ask: row.get(9)?,
            timestamp: row.get(10)?,
            create_date: row.get(11)?,
        },
    })
}

/// Interrupted or busy statements mean the deadline ran out; anything else is a storage failure.
fn storage_error(err: rusqlite::Error) -> RateError {
    match err.sqlite_error_code() {
        Some(ErrorCode::OperationInterrupted) | Some(ErrorCode::DatabaseBusy) => {
            RateError::Timeout(format!("ledger: {}", err))
        }
        _ => RateError::Storage(err.to_string()),
    }
}
