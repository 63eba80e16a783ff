use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "llama2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub book: String,
    pub model: String,
}

impl RecommendationRequest {
    pub fn new(book: impl Into<String>, model: Option<String>) -> Self {
        Self {
            book: book.into(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub original_book: String,
    pub recommendations: String,
    pub model: String,
}
