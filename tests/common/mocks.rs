use async_trait::async_trait;
use lingua_proxy::{
    Error, Result,
    dispatcher::{Notifier, TranslateApi},
};
use std::sync::Mutex;

/// One scripted outcome of a mock translation call.
pub enum MockOutcome {
    Translation(String),
    Error(String),
    /// Never resolves; lets tests drop a call mid-flight.
    Stall,
}

/// Mock translate API for dispatcher tests. Records every call and replays
/// scripted outcomes in order.
pub struct MockTranslateApi {
    pub calls: Mutex<Vec<(String, String, String)>>,
    pub outcomes: Mutex<Vec<MockOutcome>>,
}

impl MockTranslateApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcomes: Mutex::new(Vec::new()),
        }
    }

    pub fn with_translation(self, text: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(MockOutcome::Translation(text.to_string()));
        self
    }

    pub fn with_error(self, message: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(MockOutcome::Error(message.to_string()));
        self
    }

    pub fn with_stall(self) -> Self {
        self.outcomes.lock().unwrap().push(MockOutcome::Stall);
        self
    }

    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockTranslateApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslateApi for MockTranslateApi {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String> {
        self.calls.lock().unwrap().push((
            text.to_string(),
            source_lang.to_string(),
            target_lang.to_string(),
        ));

        let outcome = {
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.is_empty() {
                return Err(Error::TranslationFailed(
                    "No more mock outcomes available".to_string(),
                ));
            }
            outcomes.remove(0)
        };

        match outcome {
            MockOutcome::Translation(text) => Ok(text),
            MockOutcome::Error(message) => Err(Error::TranslationFailed(message)),
            MockOutcome::Stall => std::future::pending().await,
        }
    }
}

/// Mock notifier capturing every toast with its channel.
pub struct MockNotifier {
    pub toasts: Mutex<Vec<(&'static str, String)>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            toasts: Mutex::new(Vec::new()),
        }
    }

    pub fn toasts(&self) -> Vec<(&'static str, String)> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for MockNotifier {
    fn success(&self, message: &str) {
        self.toasts.lock().unwrap().push(("success", message.to_string()));
    }

    fn error(&self, message: &str) {
        self.toasts.lock().unwrap().push(("error", message.to_string()));
    }

    fn info(&self, message: &str) {
        self.toasts.lock().unwrap().push(("info", message.to_string()));
    }
}
