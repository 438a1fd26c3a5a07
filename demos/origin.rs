//! A local stand-in for httpbin's `/get`.
//!
//! ```bash
//! cargo run --example origin
//! ```
//!
//! Point a config at it and add `delay=<ms>` to a URI to hold its response
//! back, e.g. to make `request=c` finish after `request=d`.
use std::collections::HashMap;

use anyhow::Result;
use axum::extract::Query;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::time::{sleep, Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "origin=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let origin = Router::new().route("/get", get(get_handler));

    let addr = "127.0.0.1:8080";
    tracing::info!("origin listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, origin).await?;

    Ok(())
}

async fn get_handler(Query(args): Query<HashMap<String, String>>) -> Json<Value> {
    if let Some(delay) = args.get("delay").and_then(|d| d.parse::<u64>().ok()) {
        tracing::debug!("holding response for {}ms", delay);
        sleep(Duration::from_millis(delay)).await;
    }

    Json(json!({ "args": args }))
}
