use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Service quota exceeded. Please try again later.")]
    QuotaExceeded,

    #[error("Translation failed")]
    Upstream { status: u16, body: String },

    #[error("No translation received")]
    EmptyCompletion,

    #[error("{0}")]
    TranslationFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// HTTP status the proxy answers with for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to clients. Upstream bodies and internal failures
    /// are collapsed to a generic message; only the templated literals and
    /// validation messages pass through.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(_)
            | Self::RateLimited
            | Self::QuotaExceeded
            | Self::Upstream { .. }
            | Self::EmptyCompletion
            | Self::TranslationFailed(_) => self.to_string(),
            _ => "Translation failed".to_string(),
        }
    }
}
