mod client;
mod types;

#[cfg(test)]
pub use client::MockBackendClient;
pub use client::{BackendClient, OllamaClient};
pub use types::{
    ChatMessage, ChatOptions, ChatRequest, ChatResponse, DEFAULT_TEMPERATURE, ModelDescriptor,
    NO_RECOMMENDATIONS, ResponseMessage, Role, TagsResponse,
};
