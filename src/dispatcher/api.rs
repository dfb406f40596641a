use crate::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Fallback shown when a failure carries no server-supplied message.
pub const FALLBACK_ERROR: &str = "Failed to translate. Please try again.";

/// The dispatcher's network seam: one translation round trip, with
/// language names already resolved by the caller.
#[async_trait]
pub trait TranslateApi: Send + Sync {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str)
    -> Result<String>;
}

/// Reply carries exactly one of `translatedText` or `error`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateReply {
    #[serde(default)]
    translated_text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Posts translation requests to the proxy endpoint.
pub struct HttpTranslateApi {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTranslateApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl TranslateApi for HttpTranslateApi {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({
                "text": text,
                "sourceLang": source_lang,
                "targetLang": target_lang,
            }))
            .send()
            .await
            .map_err(|e| {
                debug!("Transport failure reaching the proxy: {}", e);
                Error::TranslationFailed(FALLBACK_ERROR.to_string())
            })?;

        let reply: TranslateReply = response
            .json()
            .await
            .map_err(|_| Error::TranslationFailed(FALLBACK_ERROR.to_string()))?;

        if let Some(error) = reply.error {
            return Err(Error::TranslationFailed(error));
        }

        reply
            .translated_text
            .ok_or_else(|| Error::TranslationFailed(FALLBACK_ERROR.to_string()))
    }
}
