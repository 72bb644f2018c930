//! Common test utilities for the HTTP workload tests.
//!
//! Provides builders for the in-memory router and for stub upstream
//! servers bound to an ephemeral local port.

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use benchd::{create_router, DataSourceClient};
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt; // for oneshot

pub fn sample_document() -> Value {
    serde_json::json!({
        "H":  {"name": "Hydrogen", "number": 1, "group": 1, "shells": [1]},
        "He": {"name": "Helium", "number": 2, "group": 18, "shells": [2]},
        "Li": {"name": "Lithium", "number": 3, "group": 1, "shells": [2, 1]}
    })
}

pub fn test_app(upstream_url: &str) -> Router {
    test_app_with_timeout(upstream_url, Duration::from_secs(2))
}

pub fn test_app_with_timeout(upstream_url: &str, timeout: Duration) -> Router {
    let data_source =
        DataSourceClient::new(upstream_url, timeout).expect("failed to build test client");
    create_router(data_source)
}

/// Serve `body` at GET /data.json on an ephemeral port; returns the URL.
pub async fn spawn_raw_upstream(body: String) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub upstream");
    let addr = listener.local_addr().unwrap();

    let app = Router::new().route(
        "/data.json",
        axum::routing::get(move || {
            let body = body.clone();
            async move { ([(header::CONTENT_TYPE, "application/json")], body) }
        }),
    );
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/data.json", addr)
}

pub async fn spawn_upstream(document: Value) -> String {
    spawn_raw_upstream(document.to_string()).await
}

/// An upstream that accepts connections but never answers them.
pub async fn spawn_hanging_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind hanging upstream");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let _hold = socket;
                tokio::time::sleep(Duration::from_secs(60)).await;
            });
        }
    });

    format!("http://{}/data.json", addr)
}

/// A URL nothing is listening on.
pub async fn unreachable_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind throwaway listener");
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}/data.json", addr)
}

pub async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn response_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
