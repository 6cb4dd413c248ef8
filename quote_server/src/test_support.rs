//! Local stand-in for the exchange-rate API.
use std::time::Duration;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use tokio::net::TcpListener;

pub const UPSTREAM_PATH: &str = "/json/last/USD-BRL";

pub const UPSTREAM_BODY: &str = r#"{"USDBRL":{"code":"USD","codein":"BRL","name":"Dólar Americano/Real Brasileiro","high":"5.4470","low":"5.3942","varBid":"0.0163","pctChange":"0.3","bid":"5.4310","ask":"5.4320","timestamp":"1712345678","create_date":"2024-04-05 17:01:18"}}"#;

/// Serve `body` with `status` after `delay` on an ephemeral port and return its URL.
pub async fn spawn_upstream(body: &'static str, status: StatusCode, delay: Duration) -> String {
    let app = Router::new().route(
        UPSTREAM_PATH,
        get(move || async move {
            tokio::time::sleep(delay).await;
            (status, [(header::CONTENT_TYPE, "application/json")], body)
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}{}", addr, UPSTREAM_PATH)
}

/// URL of a local port nobody listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, UPSTREAM_PATH)
}
