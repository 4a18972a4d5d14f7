//! Stub HTTP endpoints for tests.
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, web};

/// Serves `body` as JSON on every path after `delay`; returns the base URL and a stop handle.
///
/// Must be called from inside an actix system (`#[actix_web::test]`).
pub(crate) fn spawn_upstream(body: &'static str, delay: Duration) -> (String, ServerHandle) {
    let server = HttpServer::new(move || {
        App::new().default_service(web::to(move || async move {
            if !delay.is_zero() {
                actix_web::rt::time::sleep(delay).await;
            }
            HttpResponse::Ok()
                .content_type("application/json")
                .body(body)
        }))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind stub upstream");
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (format!("http://{}/json/last/USD-BRL", addr), handle)
}
