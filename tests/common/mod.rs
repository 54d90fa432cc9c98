// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Html,
    routing,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use url_summary_server::{app::build_router, fetcher::Fetcher, state::AppState};

pub const TEST_FUNCTION_KEY: &str = "test-function-key";

pub const OG_PAGE: &str = r#"<html><head><meta property="og:title" content="Hello"><meta property="og:image" content="http://img/x.png"></head></html>"#;
pub const PLAIN_PAGE: &str = "<html><head><title>Plain</title></head><body><p>No meta here</p></body></html>";
pub const DUPLICATE_PAGE: &str = r#"<html><head>
    <meta property="og:title" content="Old">
    <meta property="og:description" content="About">
    <meta property="og:type" content="article">
    <meta property="OG:image" content="http://img/ignored.png">
    <meta property="og:title" content="New">
</head></html>"#;

/// Fixture pages live on loopback, so bypass any proxy from the environment.
fn test_fetcher() -> Fetcher {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .no_proxy()
        .build()
        .expect("build test client");
    Fetcher::with_client(client)
}

/// Build the application router with no function key configured.
pub fn create_test_app() -> Router {
    build_router(
        AppState {
            fetcher: test_fetcher(),
            function_key: None,
        },
        CorsLayer::permissive(),
    )
}

/// Build the application router gated by [`TEST_FUNCTION_KEY`].
pub fn create_keyed_app() -> Router {
    build_router(
        AppState {
            fetcher: test_fetcher(),
            function_key: Some(Arc::from(TEST_FUNCTION_KEY)),
        },
        CorsLayer::permissive(),
    )
}

/// Serve fixture pages on an ephemeral local port and return its base URL.
pub async fn spawn_fixture_site() -> String {
    let site = Router::new()
        .route("/og", routing::get(|| async { Html(OG_PAGE) }))
        .route("/plain", routing::get(|| async { Html(PLAIN_PAGE) }))
        .route("/duplicate", routing::get(|| async { Html(DUPLICATE_PAGE) }))
        .route("/broken", routing::get(|| async { Html("<meta property=\"og:title\" content=\"Half") }))
        .route(
            "/gone",
            routing::get(|| async { (StatusCode::NOT_FOUND, Html(OG_PAGE)) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture site");
    let addr: SocketAddr = listener.local_addr().expect("fixture addr");
    tokio::spawn(async move {
        axum::serve(listener, site).await.ok();
    });
    format!("http://{addr}")
}

/// A URL on a port nothing listens on.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/";

// ── Request helpers ──────────────────────────────────────────────────────────

pub fn summary_uri(target: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("/api/URLSummary?BaseURL={encoded}")
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn get_with_header(
    app: Router,
    uri: &str,
    name: &str,
    value: &str,
) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(name, value)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub fn json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or(Value::Null)
}
