mod prompt;
mod types;

pub use prompt::{SYSTEM_PROMPT, user_message};
pub use types::{DEFAULT_MODEL, RecommendationRequest, RecommendationResult};

use crate::{
    Error, Result,
    ollama::{BackendClient, ChatRequest},
};
use std::sync::Arc;
use tracing::{error, info};

/// Orchestrates a single recommendation: validate, check the model, prompt.
pub struct RecommendationService {
    backend: Arc<dyn BackendClient>,
}

impl RecommendationService {
    pub fn new(backend: Arc<dyn BackendClient>) -> Self {
        Self { backend }
    }

    pub async fn recommend(&self, request: RecommendationRequest) -> Result<RecommendationResult> {
        let RecommendationRequest { book, model } = request;

        if book.is_empty() {
            return Err(Error::validation("Book name is required"));
        }

        info!("Getting recommendations for: {}", book);
        info!("Using model: {}", model);

        let available_models: Vec<String> = self
            .backend
            .list_models()
            .await
            .map_err(|e| {
                error!("Failed to list models before recommending: {}", e);
                Error::upstream(e)
            })?
            .into_iter()
            .filter_map(|m| m.name)
            .collect();

        if !available_models.contains(&model) {
            error!(
                "Requested model {} is not available (have: {:?})",
                model, available_models
            );
            return Err(Error::unknown_model(&model, available_models));
        }

        let chat = ChatRequest::new(model.as_str(), SYSTEM_PROMPT, user_message(&book));
        let recommendations = self.backend.chat(chat).await.map_err(|e| {
            error!("Chat request with model {} failed: {}", model, e);
            Error::upstream(e)
        })?;

        info!("Recommendations generated successfully");

        Ok(RecommendationResult {
            original_book: book,
            recommendations,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ollama::{MockBackendClient, ModelDescriptor, Role};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::Map;

    fn models(names: &[&str]) -> Vec<ModelDescriptor> {
        names
            .iter()
            .map(|n| ModelDescriptor {
                name: Some(n.to_string()),
                details: Map::new(),
            })
            .collect()
    }

    fn service(mock: MockBackendClient) -> RecommendationService {
        RecommendationService::new(Arc::new(mock))
    }

    #[rstest]
    #[case::plain("Dune")]
    #[case::whitespace_only("   ")]
    #[case::non_ascii("Cien años de soledad")]
    #[case::quoted(r#"The "Hobbit""#)]
    #[tokio::test]
    async fn test_recommend_success(#[case] book: &str) {
        let expected_message = format!("Please recommend books similar to \"{}\".", book);

        let mut mock = MockBackendClient::new();
        mock.expect_list_models()
            .times(1)
            .returning(|| Ok(models(&["llama2", "mistral"])));
        mock.expect_chat()
            .times(1)
            .withf(move |req: &ChatRequest| {
                req.model == "mistral"
                    && !req.stream
                    && req.messages.len() == 2
                    && req.messages[0].role == Role::System
                    && req.messages[0].content == SYSTEM_PROMPT
                    && req.messages[1].role == Role::User
                    && req.messages[1].content == expected_message
            })
            .returning(|_| Ok("1. Hyperion by Dan Simmons".to_string()));

        let result = service(mock)
            .recommend(RecommendationRequest::new(book, Some("mistral".to_string())))
            .await
            .unwrap();

        assert_eq!(
            result,
            RecommendationResult {
                original_book: book.to_string(),
                recommendations: "1. Hyperion by Dan Simmons".to_string(),
                model: "mistral".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_unnamed_model_entry_never_matches() {
        let mut mock = MockBackendClient::new();
        mock.expect_list_models().returning(|| {
            let mut listed = models(&["mistral"]);
            listed.push(ModelDescriptor {
                name: None,
                details: Map::new(),
            });
            Ok(listed)
        });
        mock.expect_chat().never();

        let err = service(mock)
            .recommend(RecommendationRequest::new("Dune", Some(String::new())))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation { available_models: Some(ref m), .. } if m == &vec!["mistral".to_string()]
        ));
    }

    #[tokio::test]
    async fn test_empty_book_makes_no_backend_call() {
        let mut mock = MockBackendClient::new();
        mock.expect_list_models().never();
        mock.expect_chat().never();

        let err = service(mock)
            .recommend(RecommendationRequest::new("", None))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Book name is required");
    }

    #[tokio::test]
    async fn test_unknown_model_carries_available_models() {
        let mut mock = MockBackendClient::new();
        mock.expect_list_models()
            .returning(|| Ok(models(&["llama2", "mistral"])));
        mock.expect_chat().never();

        let err = service(mock)
            .recommend(RecommendationRequest::new(
                "Dune",
                Some("gpt-nonexistent".to_string()),
            ))
            .await
            .unwrap_err();

        match err {
            Error::Validation {
                message,
                available_models,
            } => {
                assert!(message.contains("gpt-nonexistent"));
                assert_eq!(
                    available_models,
                    Some(vec!["llama2".to_string(), "mistral".to_string()])
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_default_model_must_exist_on_backend() {
        let mut mock = MockBackendClient::new();
        mock.expect_list_models()
            .returning(|| Ok(models(&["mistral"])));
        mock.expect_chat().never();

        let err = service(mock)
            .recommend(RecommendationRequest::new("Dune", None))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().starts_with("Model 'llama2' not found"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_skips_chat() {
        let mut mock = MockBackendClient::new();
        mock.expect_list_models()
            .times(1)
            .returning(|| Err(Error::unreachable("http://127.0.0.1:11434", "connection refused")));
        mock.expect_chat().never();

        let err = service(mock)
            .recommend(RecommendationRequest::new("Dune", None))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Upstream(_)));
        assert!(matches!(err.root(), Error::BackendUnreachable { .. }));
    }

    #[tokio::test]
    async fn test_chat_failure_is_upstream() {
        let mut mock = MockBackendClient::new();
        mock.expect_list_models()
            .returning(|| Ok(models(&["llama2"])));
        mock.expect_chat().times(1).returning(|_| {
            Err(Error::Backend {
                status: 404,
                body: "model not loaded".to_string(),
            })
        });

        let err = service(mock)
            .recommend(RecommendationRequest::new("Dune", None))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Upstream(_)));
        assert_eq!(err.to_string(), "Ollama API error: 404 - model not loaded");
    }

    #[tokio::test]
    async fn test_empty_model_list_rejects_any_model() {
        let mut mock = MockBackendClient::new();
        mock.expect_list_models().returning(|| Ok(Vec::new()));
        mock.expect_chat().never();

        let err = service(mock)
            .recommend(RecommendationRequest::new("Dune", None))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation { available_models: Some(ref m), .. } if m.is_empty()
        ));
    }
}
