//! End-to-end tests over a real listener: the slow endpoint must not hold up
//! concurrent requests.

mod common;

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde_json::json;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server(slow_delay_ms: u64) -> anyhow::Result<TestApp> {
    let app = common::build_app(slow_delay_ms).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn e2e_slow_endpoint_waits_about_two_seconds() -> anyhow::Result<()> {
    let app = start_server(2000).await?;
    let client = reqwest::Client::new();

    let start = Instant::now();
    let res = client.get(format!("{}/users/slow", app.base_url)).send().await?;
    let elapsed = start.elapsed();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, "finished slow operation");
    assert!(elapsed >= Duration::from_millis(2000), "returned after {elapsed:?}");
    assert!(elapsed < Duration::from_secs(10), "took {elapsed:?}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn e2e_other_requests_complete_during_slow_call() -> anyhow::Result<()> {
    let app = start_server(2000).await?;
    let client = reqwest::Client::new();

    let slow_url = format!("{}/users/slow", app.base_url);
    let slow_client = client.clone();
    let slow = tokio::spawn(async move { slow_client.get(slow_url).send().await });

    // let the slow request reach its handler
    tokio::time::sleep(Duration::from_millis(200)).await;

    let start = Instant::now();
    let res = client
        .post(format!("{}/users", app.base_url))
        .json(&json!({"name": "Alice"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await?;

    let res = client.get(format!("{}/users", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let list: serde_json::Value = res.json().await?;
    assert!(list.as_array().expect("array").iter().any(|u| u["id"] == created["id"]));
    let fast_elapsed = start.elapsed();

    assert!(fast_elapsed < Duration::from_millis(1500), "fast path blocked for {fast_elapsed:?}");
    assert!(!slow.is_finished(), "slow request should still be sleeping");

    let slow_res = slow.await??;
    assert_eq!(slow_res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn e2e_crud_round_trip() -> anyhow::Result<()> {
    let app = start_server(0).await?;
    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{}/users", app.base_url))
        .json(&json!({"name": "Alice"}))
        .send()
        .await?
        .json()
        .await?;
    let id = created["id"].as_i64().expect("id");

    let res = client
        .put(format!("{}/users/{id}", app.base_url))
        .json(&json!({"name": "Bob"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let fetched: serde_json::Value = client.get(format!("{}/users/{id}", app.base_url)).send().await?.json().await?;
    assert_eq!(fetched["name"], "Bob");

    let res = client.delete(format!("{}/users/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client.get(format!("{}/users/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
