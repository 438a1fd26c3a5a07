#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Once};
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{routing::get, Router};
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio::time::sleep;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fetchlog::response::HttpResponse;
use fetchlog::transport::Transport;
use fetchlog::TransportError;

static TRACING_INITIALIZED: Once = Once::new();

// Help function to add tracing to tests
// Note: This is safe to use for multiple tests, but since tests are run concurrently the
// output may be interleaved
pub fn enable_tracing() {
    TRACING_INITIALIZED.call_once(|| {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "fetchlog=trace".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    });
}

enum Outcome {
    Body(String),
    Fail,
}

struct Route {
    delay: Duration,
    outcome: Outcome,
}

/// Transport with canned answers per URI. Delays use tokio time, so tests
/// running with a paused clock resolve them deterministically. A route with
/// no delay answers on the first poll without ever yielding.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    routes: Arc<Mutex<HashMap<String, Route>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, uri: &str, body: &str) -> Self {
        self.respond_after(uri, Duration::ZERO, body)
    }

    pub fn respond_after(self, uri: &str, delay: Duration, body: &str) -> Self {
        self.route(uri, delay, Outcome::Body(body.to_string()))
    }

    pub fn fail(self, uri: &str) -> Self {
        self.fail_after(uri, Duration::ZERO)
    }

    pub fn fail_after(self, uri: &str, delay: Duration) -> Self {
        self.route(uri, delay, Outcome::Fail)
    }

    fn route(self, uri: &str, delay: Duration, outcome: Outcome) -> Self {
        self.routes
            .lock()
            .insert(uri.to_string(), Route { delay, outcome });
        self
    }

    /// URIs in the order `get` was called with them.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, uri: &str) -> Result<HttpResponse, TransportError> {
        self.calls.lock().push(uri.to_string());

        let (delay, body) = {
            let routes = self.routes.lock();
            match routes.get(uri) {
                Some(Route {
                    delay,
                    outcome: Outcome::Body(body),
                }) => (*delay, Some(body.clone())),
                Some(Route {
                    delay,
                    outcome: Outcome::Fail,
                }) => (*delay, None),
                None => return Err(TransportError::new(uri, "no route")),
            }
        };

        if !delay.is_zero() {
            sleep(delay).await;
        }

        match body {
            Some(body) => Ok(HttpResponse::new(200, body)),
            None => Err(TransportError::new(uri, "connection reset by peer")),
        }
    }
}

async fn get_handler(Query(params): Query<HashMap<String, String>>) -> String {
    let request = params.get("request").cloned().unwrap_or_default();
    format!("request={}", request)
}

async fn slow_handler(Query(params): Query<HashMap<String, String>>) -> String {
    sleep(Duration::from_millis(300)).await;
    let request = params.get("request").cloned().unwrap_or_default();
    format!("slow request={}", request)
}

async fn failure_handler() -> impl axum::response::IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "unexpected error".to_string(),
    )
}

/// Starts a local origin and returns its address.
pub async fn origin() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new()
        .route("/get", get(get_handler))
        .route("/slow", get(slow_handler))
        .route("/failure", get(failure_handler));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
