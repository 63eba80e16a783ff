use super::types::*;
use crate::{Error, Result, config::OllamaConfig};
use async_trait::async_trait;
use reqwest::Response;
use tracing::{debug, info};

/// Sole point of contact with the inference server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>>;

    /// Returns the assistant's reply text.
    async fn chat(&self, request: ChatRequest) -> Result<String>;
}

pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::Backend {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl BackendClient for OllamaClient {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>> {
        let url = self.endpoint("/api/tags");
        debug!("Fetching available models from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::unreachable(&self.base_url, e))?;
        let response = Self::check_status(response).await?;

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(format!("model list: {}", e)))?;

        debug!("Models fetched successfully: {}", tags.models.len());
        Ok(tags.models)
    }

    async fn chat(&self, request: ChatRequest) -> Result<String> {
        let url = self.endpoint("/api/chat");
        debug!(
            "Sending chat request to {} with model {} and {} messages",
            url,
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::unreachable(&self.base_url, e))?;

        info!("Ollama response status: {}", response.status());
        let response = Self::check_status(response).await?;

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(format!("chat completion: {}", e)))?;

        Ok(chat.into_content())
    }
}
