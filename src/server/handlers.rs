use super::types::{ConnectionTestResponse, ErrorResponse, RecommendBody};
use crate::{
    Error,
    ollama::{BackendClient, TagsResponse},
    recommend::{RecommendationResult, RecommendationService},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

const TAGS_TIP: &str = "Make sure Ollama is running on port 11434";
const RECOMMEND_TIP: &str = "Check if Ollama is running and the model is downloaded";

type ErrorReply = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendClient>,
    pub service: Arc<RecommendationService>,
    pub ollama_url: String,
}

impl AppState {
    pub fn new(backend: Arc<dyn BackendClient>, ollama_url: impl Into<String>) -> Self {
        Self {
            service: Arc::new(RecommendationService::new(backend.clone())),
            backend,
            ollama_url: ollama_url.into(),
        }
    }
}

pub async fn list_models(State(state): State<AppState>) -> Result<Json<TagsResponse>, ErrorReply> {
    info!("Fetching available models from: {}", state.ollama_url);

    match state.backend.list_models().await {
        Ok(models) => {
            info!("Models fetched successfully: {}", models.len());
            Ok(Json(TagsResponse { models }))
        }
        Err(e) => {
            error!("Error fetching models from {}: {}", state.ollama_url, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(
                    ErrorResponse::new("Failed to fetch models from Ollama")
                        .with_details(e.to_string())
                        .with_tip(TAGS_TIP),
                ),
            ))
        }
    }
}

pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendBody>, JsonRejection>,
) -> Result<Json<RecommendationResult>, ErrorReply> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected recommendation request body: {}", rejection);
        (
            rejection.status(),
            Json(ErrorResponse::new("Invalid request body").with_details(rejection.body_text())),
        )
    })?;

    let Some(request) = body.into_request() else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Book name is required")),
        ));
    };

    let model = request.model.clone();
    match state.service.recommend(request).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            if e.is_validation() {
                warn!("Rejected recommendation request for model {}: {}", model, e);
            } else {
                error!(
                    "Error getting recommendations with model {} from {}: {}",
                    model, state.ollama_url, e
                );
            }
            Err(recommend_error(e))
        }
    }
}

fn recommend_error(err: Error) -> ErrorReply {
    match err {
        Error::Validation {
            message,
            available_models,
        } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: message,
                available_models,
                ..Default::default()
            }),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(
                ErrorResponse::new("Failed to get recommendations")
                    .with_details(other.to_string())
                    .with_tip(RECOMMEND_TIP),
            ),
        ),
    }
}

pub async fn test_connection(
    State(state): State<AppState>,
) -> Result<Json<ConnectionTestResponse>, (StatusCode, Json<ConnectionTestResponse>)> {
    info!("Testing Ollama connection to: {}", state.ollama_url);

    match state.backend.list_models().await {
        Ok(models) => Ok(Json(ConnectionTestResponse {
            status: "success",
            message: "Ollama is running correctly!".to_string(),
            ollama_url: state.ollama_url,
            available_models: Some(models.into_iter().filter_map(|m| m.name).collect()),
            error: None,
        })),
        Err(e) => {
            error!("Ollama connection test against {} failed: {}", state.ollama_url, e);
            let message = match e.root() {
                Error::Backend { .. } | Error::InvalidResponse(_) => {
                    "Ollama is not responding correctly"
                }
                _ => "Cannot connect to Ollama",
            };
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ConnectionTestResponse {
                    status: "error",
                    message: message.to_string(),
                    ollama_url: state.ollama_url,
                    available_models: None,
                    error: Some(e.to_string()),
                }),
            ))
        }
    }
}
