//! Stub local quote endpoint for tests.
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, web};

/// Serves `body` on `/cotacao` after `delay`. An empty `body` is sent with no
/// content type, the way the server abandons a failed request.
pub(crate) fn spawn_endpoint(body: &'static str, delay: Duration) -> (String, ServerHandle) {
    let server = HttpServer::new(move || {
        App::new().route(
            "/cotacao",
            web::get().to(move || async move {
                if !delay.is_zero() {
                    actix_web::rt::time::sleep(delay).await;
                }
                if body.is_empty() {
                    HttpResponse::Ok().finish()
                } else {
                    HttpResponse::Ok()
                        .content_type("application/json")
                        .body(body)
                }
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind stub endpoint");
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (format!("http://{}/cotacao", addr), handle)
}
