#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use book_recommender::{
    config::OllamaConfig,
    ollama::{BackendClient, OllamaClient},
    server::{self, AppState},
};
use serde_json::json;
use std::sync::Arc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const TEST_BODY_LIMIT: usize = 1024 * 1024;

/// Start a mock Ollama server whose `/api/tags` lists the given models.
pub async fn mock_ollama_with_models(models: &[&str]) -> MockServer {
    let server = MockServer::start().await;
    mount_tags(&server, models).await;
    server
}

pub async fn mount_tags(server: &MockServer, models: &[&str]) {
    let models: Vec<_> = models
        .iter()
        .map(|name| json!({"name": name, "size": 3825819519u64}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": models })))
        .mount(server)
        .await;
}

/// A loopback URL with nothing listening on it.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);
    format!("http://{}", addr)
}

pub fn ollama_client(base_url: &str) -> OllamaClient {
    OllamaClient::new(OllamaConfig {
        base_url: base_url.to_string(),
    })
}

pub fn create_test_app(base_url: &str) -> Router {
    let client = ollama_client(base_url);
    let ollama_url = client.base_url().to_string();
    let backend: Arc<dyn BackendClient> = Arc::new(client);

    server::router(
        AppState::new(backend, ollama_url),
        "tests/fixtures/public",
        TEST_BODY_LIMIT,
    )
}

pub fn create_test_server(base_url: &str) -> TestServer {
    TestServer::new(create_test_app(base_url)).expect("Failed to start test server")
}
