//! Fixed endpoints, deadlines and file names used by client and server.
//!
//! Both binaries expose these as CLI defaults; running with no flags uses
//! exactly these values.

/// TCP port the local quote endpoint listens on.
pub const SERVER_PORT: u16 = 8080;
/// Route of the local quote endpoint.
pub const QUOTE_PATH: &str = "/cotacao";
/// Upstream exchange-rate API queried by the server.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// Local quote endpoint queried by the client.
pub const LOCAL_QUOTE_URL: &str = "http://localhost:8080/cotacao";

/// Upstream fetch deadline, network and parse included.
pub const FETCH_DEADLINE_MS: u64 = 200;
/// Ledger insert deadline.
pub const STORE_DEADLINE_MS: u64 = 10;
/// Client request deadline.
pub const REQUEST_DEADLINE_MS: u64 = 300;

/// SQLite file holding the ledger.
pub const DB_PATH: &str = "./cambio.db";
/// Ledger table name.
pub const TABLE_NAME: &str = "cambio";
/// File the client writes the quote to.
pub const OUTPUT_FILE: &str = "cotacao.txt";

/// Helper to format a bind address like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}
