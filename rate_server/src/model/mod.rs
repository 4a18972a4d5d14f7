//! Domain models for the rate server.
//!
//! - `quote` — the upstream `ExchangeQuote` observation and its JSON envelope.
pub mod quote;
