use super::api::TranslateApi;
use super::languages::language_name;
use super::notify::Notifier;
use crate::translator::AUTO_SENTINEL;
use std::sync::Arc;

/// Request lifecycle of the dispatcher. `Loading` is only observable from
/// outside a `translate` call when that call was dropped mid-flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Loading,
    Success,
    Error,
}

/// Client-side translation session: source/target selection, the text
/// panels, and the state machine driving one request at a time. No caching,
/// history, or persistence; nothing outlives a translate action.
pub struct TranslatorSession {
    state: SessionState,
    source_lang: String,
    target_lang: String,
    source_text: String,
    translated_text: String,
    api: Arc<dyn TranslateApi>,
    notifier: Arc<dyn Notifier>,
}

impl TranslatorSession {
    pub fn new(api: Arc<dyn TranslateApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: SessionState::Idle,
            source_lang: AUTO_SENTINEL.to_string(),
            target_lang: "es".to_string(),
            source_text: String::new(),
            translated_text: String::new(),
            api,
            notifier,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn set_source_lang(&mut self, code: impl Into<String>) {
        self.source_lang = code.into();
    }

    pub fn set_target_lang(&mut self, code: impl Into<String>) {
        self.target_lang = code.into();
    }

    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    /// Issues one translation round trip. Empty input is rejected locally
    /// before any network call. `&mut self` keeps at most one call in
    /// flight per session.
    pub async fn translate(&mut self) {
        // Observing `Loading` here means an earlier call was dropped
        // mid-flight; recover rather than wedging the session.
        if self.state == SessionState::Loading {
            self.state = SessionState::Error;
        }
        if self.source_text.trim().is_empty() {
            self.notifier.error("Please enter text to translate");
            return;
        }

        self.state = SessionState::Loading;
        // The previous translation is cleared up front, so a failed request
        // leaves the panel blank rather than restoring the old output.
        self.translated_text.clear();

        let source_name = language_name(&self.source_lang);
        let target_name = language_name(&self.target_lang);

        match self
            .api
            .translate(&self.source_text, &source_name, &target_name)
            .await
        {
            Ok(text) => {
                self.translated_text = text;
                self.state = SessionState::Success;
                self.notifier.success("Translation complete!");
            }
            Err(e) => {
                self.state = SessionState::Error;
                self.notifier.error(&e.to_string());
            }
        }
    }

    /// Exchanges source/target languages and source/translated text
    /// atomically. Auto-detect has no inverse target, so swapping is
    /// rejected with a notice while it is selected.
    pub fn swap_direction(&mut self) {
        if self.source_lang == AUTO_SENTINEL {
            self.notifier
                .info("Cannot swap when source is set to auto-detect");
            return;
        }

        std::mem::swap(&mut self.source_lang, &mut self.target_lang);
        std::mem::swap(&mut self.source_text, &mut self.translated_text);
    }
}
