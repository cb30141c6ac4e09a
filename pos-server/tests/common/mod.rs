//! Shared helpers for integration tests
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use pos_server::auth::JwtConfig;
use pos_server::db::DbService;
use pos_server::{Config, ServerState};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Server state backed by a RocksDB database in a fresh temp dir
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub async fn test_state() -> (TempDir, ServerState) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = Config::with_overrides(
        tmp.path().to_string_lossy().to_string(),
        0,
        JwtConfig::for_secret(TEST_SECRET),
    );
    let db = DbService::new(&config.database_dir())
        .await
        .expect("open database");
    (tmp, ServerState::new(config, db.db))
}

pub fn token(state: &ServerState) -> String {
    state
        .jwt_service
        .generate_token("user:1", "cashier", "waiter")
        .expect("token")
}

/// Percent-encode everything outside the unreserved set (and `:`) so that
/// escaped record ids survive as a URI path segment.
pub fn encode_id(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for byte in id.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b':' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Fire one request at the app and decode the JSON body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
