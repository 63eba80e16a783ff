use crate::recommend::RecommendationRequest;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/recommend`. Both fields are optional on the wire so a
/// missing title is reported as our own 400 instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendBody {
    #[serde(default)]
    pub book: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl RecommendBody {
    /// `None` when the book title is missing, null or empty.
    pub fn into_request(self) -> Option<RecommendationRequest> {
        let book = self.book.filter(|b| !b.is_empty())?;
        Some(RecommendationRequest::new(book, self.model))
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_models: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            ..Default::default()
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionTestResponse {
    pub status: &'static str,
    pub message: String,
    pub ollama_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_models: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
