use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{message}")]
    Validation {
        message: String,
        available_models: Option<Vec<String>>,
    },

    #[error("Cannot connect to Ollama at {url}: {reason}")]
    BackendUnreachable { url: String, reason: String },

    #[error("Ollama API error: {status} - {body}")]
    Backend { status: u16, body: String },

    #[error("Invalid response from Ollama: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Upstream(Box<Error>),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            available_models: None,
        }
    }

    pub fn unknown_model(model: &str, available_models: Vec<String>) -> Self {
        Self::Validation {
            message: format!(
                "Model '{}' not found. Available models: {}",
                model,
                available_models.join(", ")
            ),
            available_models: Some(available_models),
        }
    }

    pub fn unreachable(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::BackendUnreachable {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Wraps a backend failure observed while serving a recommendation.
    pub fn upstream(inner: Error) -> Self {
        match inner {
            Self::Upstream(_) => inner,
            other => Self::Upstream(Box::new(other)),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The innermost error, looking through `Upstream` wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Self::Upstream(inner) => inner.root(),
            other => other,
        }
    }
}
