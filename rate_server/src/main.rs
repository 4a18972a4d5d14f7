//! USD/BRL rate server.
//!
//! Serves `GET /cotacao`. Each request runs the same linear pipeline:
//!
//! - `RateFetcher` — GETs the upstream exchange-rate API under a 200 ms deadline
//!   and decodes the `{"USDBRL": {...}}` envelope into an `ExchangeQuote`.
//! - `QuoteStore` — opens the SQLite ledger, ensures the `cambio` table exists and
//!   appends one row with all eleven upstream fields, under a 10 ms deadline.
//! - `handler` — replies `{"valor": "<bid>"}` as JSON once both steps succeed.
//!
//! Concurrency: actix-web runs each request on its worker pool; requests share
//! only immutable `AppState` and open their own ledger handle, so there is no
//! locking. Any error is logged and the request is abandoned without a body.
#![warn(missing_docs)]
use actix_web::{App, HttpServer, web};
use clap::Parser;
use log::{info, warn};
use rate_common::Result;
use rate_common::net::addr;

use crate::args::Args;
use crate::handler::AppState;
use crate::store::QuoteStore;

mod args;
mod fetcher;
mod handler;
mod model;
mod store;
#[cfg(test)]
mod test_support;

#[actix_web::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    let client = reqwest::Client::builder().build()?;
    let state = web::Data::new(AppState::from_args(&args, client));

    let bind_address = addr("0.0.0.0", args.port);
    info!(
        "Serving quotes on {} (upstream {}, ledger {})",
        bind_address,
        state.fetcher.url(),
        state.store.path().display()
    );

    log_ledger_state(&state.store);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(handler::routes))
        .bind(&bind_address)?
        .run()
        .await?;
    Ok(())
}

/// Reports what the ledger already holds. A read failure is not fatal: every
/// request opens its own handle anyway.
fn log_ledger_state(store: &QuoteStore) {
    match (store.count(), store.latest()) {
        (Ok(0), Ok(_)) => info!("Ledger {} is empty", store.path().display()),
        (Ok(rows), Ok(Some(last))) => info!(
            "Ledger {} holds {} quotes; last was row {} with bid {} at {}",
            store.path().display(),
            rows,
            last.id,
            last.quote.bid,
            last.quote.create_date
        ),
        (Ok(rows), Ok(None)) => info!("Ledger {} holds {} quotes", store.path().display(), rows),
        (Err(e), _) | (_, Err(e)) => warn!("Could not read ledger {}: {}", store.path().display(), e),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
