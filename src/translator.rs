use crate::gateway::{ChatCompletionRequest, ChatMessage, CompletionClient};
use crate::{Error, Result};
use std::sync::Arc;
use tracing::info;

/// Source-language value signaling that the model should infer the source
/// language itself.
pub const AUTO_SENTINEL: &str = "auto";

/// Core proxy pipeline: compose the translator prompt, dispatch exactly one
/// completion call, extract and trim the first choice. Stateless between
/// calls; no retries, no caching.
pub struct Translator {
    model: String,
    client: Arc<dyn CompletionClient>,
}

impl Translator {
    pub fn new(model: impl Into<String>, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            model: model.into(),
            client,
        }
    }

    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String> {
        let source_language = resolve_source_language(source_lang);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt(&source_language, target_lang)),
                ChatMessage::user(text),
            ],
        };

        let response = self.client.chat_completion(request).await?;

        let translated = response.first_content().map(str::trim).unwrap_or("");
        if translated.is_empty() {
            return Err(Error::EmptyCompletion);
        }

        info!(
            "Translated {:?} from {} to {}: {:?}",
            text, source_language, target_lang, translated
        );

        Ok(translated.to_string())
    }
}

fn resolve_source_language(source_lang: &str) -> String {
    if source_lang == AUTO_SENTINEL {
        "the source language (auto-detect)".to_string()
    } else {
        source_lang.to_string()
    }
}

fn system_prompt(source_language: &str, target_lang: &str) -> String {
    format!(
        "You are a professional translator. Translate text from {source_language} to {target_lang}. \n\
         Only respond with the translated text, nothing else. Do not add explanations, notes, or quotation marks around the translation.\n\
         If the text is already in the target language, return it as is.\n\
         Maintain the original formatting, punctuation, and capitalization style."
    )
}
