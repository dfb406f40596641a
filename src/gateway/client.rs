use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::{Error, Result, config::GatewayConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, error};

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

/// HTTP client for an OpenAI-style chat-completion gateway.
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GatewayClient {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for GatewayClient {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        // The credential is checked per invocation, not at startup.
        if self.api_key.is_empty() {
            return Err(Error::config("GATEWAY_API_KEY is not configured"));
        }

        debug!(
            "Dispatching chat completion to {} with {} messages",
            self.completions_url(),
            request.messages.len()
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(Error::RateLimited);
            }
            if status == StatusCode::PAYMENT_REQUIRED {
                return Err(Error::QuotaExceeded);
            }
            // The body is logged for diagnosis but never returned to callers.
            let body = response.text().await.unwrap_or_default();
            error!("Gateway error: {} {}", status, body);
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<ChatCompletionResponse>().await?)
    }
}
