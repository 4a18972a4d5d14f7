//! `GET /cotacao` — fetch, persist, respond.
//!
//! The request moves strictly forward: fetched, persisted, responded. Any
//! failure is logged and the request ends with nothing written, so the caller
//! receives the host's default empty response.
use std::time::Duration;

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use log::{error, info};
use rate_common::net::QUOTE_PATH;
use rate_common::{QuoteSummary, RateError, Result};

use crate::args::Args;
use crate::fetcher::RateFetcher;
use crate::model::quote::ExchangeQuote;
use crate::store::QuoteStore;

/// Per-process state shared by every request. Nothing in it is mutated.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Upstream fetcher with its injected HTTP client.
    pub fetcher: RateFetcher,
    /// Ledger location.
    pub store: QuoteStore,
    /// Upstream fetch deadline.
    pub fetch_deadline: Duration,
    /// Ledger insert deadline.
    pub store_deadline: Duration,
}

impl AppState {
    /// Builds state from CLI arguments around an already configured HTTP client.
    pub fn from_args(args: &Args, client: reqwest::Client) -> Self {
        Self {
            fetcher: RateFetcher::new(client, args.upstream_url.clone()),
            store: QuoteStore::new(args.db_path.clone()),
            fetch_deadline: args.fetch_deadline(),
            store_deadline: args.store_deadline(),
        }
    }
}

/// Registers the quote route.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route(QUOTE_PATH, web::get().to(get_quote));
}

/// Logs the end of a request on every exit path.
struct RequestLog;

impl RequestLog {
    fn start() -> Self {
        info!("Request started");
        RequestLog
    }
}

impl Drop for RequestLog {
    fn drop(&mut self) {
        info!("Request finished");
    }
}

async fn get_quote(state: web::Data<AppState>) -> HttpResponse {
    let _log = RequestLog::start();

    match fetch_and_persist(&state).await {
        Ok(quote) => respond(&quote),
        Err(e) => {
            error!("{}", e);
            HttpResponse::Ok().finish()
        }
    }
}

async fn fetch_and_persist(state: &AppState) -> Result<ExchangeQuote> {
    let quote = state.fetcher.fetch_quote(state.fetch_deadline).await?;
    info!("USD/BRL bid is {}", quote.bid);

    let store = state.store.clone();
    let deadline = state.store_deadline;
    let persisted = quote.clone();
    let id = web::block(move || store.persist(&persisted, deadline))
        .await
        .map_err(|e| RateError::Storage(e.to_string()))??;
    info!("Quote saved as ledger row {}", id);

    Ok(quote)
}

fn respond(quote: &ExchangeQuote) -> HttpResponse {
    match QuoteSummary::from(quote).to_json_bytes() {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body),
        Err(e) => {
            error!("{}", e);
            HttpResponse::Ok().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::quote::tests::{SAMPLE_BODY, sample_quote};
    use crate::test_support::spawn_upstream;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use tempfile::TempDir;

    fn state(upstream_url: &str, db: std::path::PathBuf, store_deadline: Duration) -> AppState {
        AppState {
            fetcher: RateFetcher::new(reqwest::Client::new(), upstream_url),
            store: QuoteStore::new(db),
            fetch_deadline: Duration::from_millis(200),
            store_deadline,
        }
    }

    #[actix_web::test]
    async fn responds_with_bid_and_appends_one_row() {
        let (url, handle) = spawn_upstream(SAMPLE_BODY, Duration::ZERO);
        let dir = TempDir::new().unwrap();
        let state = state(&url, dir.path().join("cambio.db"), Duration::from_secs(5));
        let store = state.store.clone();
        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/cotacao").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );
        let body = test::read_body(resp).await;
        assert_eq!(body, r#"{"valor":"5.21"}"#);

        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.latest().unwrap().unwrap().quote, sample_quote());
        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn upstream_timeout_writes_nothing_and_adds_no_row() {
        let (url, handle) = spawn_upstream(SAMPLE_BODY, Duration::from_millis(600));
        let dir = TempDir::new().unwrap();
        let state = state(&url, dir.path().join("cambio.db"), Duration::from_secs(5));
        let store = state.store.clone();
        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/cotacao").to_request()).await;
        assert!(resp.headers().get("content-type").is_none());
        assert!(test::read_body(resp).await.is_empty());
        assert_eq!(store.count().unwrap(), 0);
        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn storage_failure_writes_nothing() {
        let (url, handle) = spawn_upstream(SAMPLE_BODY, Duration::ZERO);
        let dir = TempDir::new().unwrap();
        let unwritable = dir.path().join("no-such-dir").join("cambio.db");
        let state = state(&url, unwritable, Duration::from_secs(5));
        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/cotacao").to_request()).await;
        assert!(resp.headers().get("content-type").is_none());
        assert!(test::read_body(resp).await.is_empty());
        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn only_get_is_routed() {
        let dir = TempDir::new().unwrap();
        let state = state("http://127.0.0.1:9/", dir.path().join("cambio.db"), Duration::from_secs(5));
        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(routes)).await;

        let resp = test::call_service(&app, test::TestRequest::post().uri("/cotacao").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
