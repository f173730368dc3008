#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response};
use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

/// Validated config over a private in-memory database.
pub fn test_config(slow_delay_ms: u64) -> anyhow::Result<AppConfig> {
    let mut cfg = AppConfig::default();
    cfg.database.url = "sqlite::memory:".into();
    cfg.server.slow_delay_ms = slow_delay_ms;
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

/// Router over a private in-memory database.
pub async fn build_app(slow_delay_ms: u64) -> anyhow::Result<Router> {
    Ok(build_app_with_db(slow_delay_ms).await?.0)
}

/// Like [`build_app`], also handing back the connection so a test can break the datastore.
pub async fn build_app_with_db(slow_delay_ms: u64) -> anyhow::Result<(Router, DatabaseConnection)> {
    let cfg = test_config(slow_delay_ms)?;
    let db = server::startup::prepare_database(&cfg).await?;
    Ok((server::startup::build_app(db.clone(), &cfg), db))
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("router is infallible")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).expect("request")).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().method("DELETE").uri(uri).body(Body::empty()).expect("request")).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("POST", uri, body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("PUT", uri, body)).await
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub async fn body_bytes(res: Response<Body>) -> Vec<u8> {
    to_bytes(res.into_body(), usize::MAX).await.expect("read body").to_vec()
}

pub async fn body_json(res: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(res).await).expect("json body")
}

pub async fn body_text(res: Response<Body>) -> String {
    String::from_utf8(body_bytes(res).await).expect("utf-8 body")
}
