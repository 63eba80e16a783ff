pub mod handlers;
pub mod types;

pub use handlers::AppState;

use crate::{
    Result,
    config::Config,
    ollama::{BackendClient, OllamaClient},
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

/// API routes plus the static client served from `static_dir`.
pub fn router(state: AppState, static_dir: &str, body_limit_bytes: usize) -> Router {
    Router::new()
        .route("/api/tags", get(handlers::list_models))
        .route("/api/recommend", post(handlers::recommend))
        .route("/api/test", get(handlers::test_connection))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit_bytes)),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = OllamaClient::new(config.ollama.clone());
    let ollama_url = client.base_url().to_string();
    let backend: Arc<dyn BackendClient> = Arc::new(client);

    let app_state = AppState::new(backend, ollama_url.clone());
    let app = router(
        app_state,
        &config.server.static_dir,
        config.server.body_limit_bytes,
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running at http://{}", addr);
    info!("Ollama URL: {}", ollama_url);
    info!("Test Ollama connection at: http://{}/api/test", addr);
    info!("Get models at: http://{}/api/tags", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
