//! Shared helpers for tests that talk to a fake generate endpoint.

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A running fake Ollama server.
pub struct TestServer {
    pub base_url: String,
    /// The JSON body of the last request received.
    pub received: Arc<Mutex<Option<Value>>>,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn a server on a random port that answers `POST /api/generate` with
/// `status` and `body`.
pub async fn spawn_generate_server(status: StatusCode, body: &'static str) -> TestServer {
    let received = Arc::new(Mutex::new(None));
    let captured = received.clone();
    let app = Router::new().route(
        "/api/generate",
        post(move |Json(payload): Json<Value>| {
            let captured = captured.clone();
            async move {
                *captured.lock().unwrap() = Some(payload);
                (status, body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url: format!("http://{addr}"),
        received,
        _handle: handle,
    }
}
