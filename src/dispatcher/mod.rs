mod api;
mod languages;
mod notify;
mod session;

pub use api::{FALLBACK_ERROR, HttpTranslateApi, TranslateApi};
pub use languages::{LANGUAGES, language_name};
pub use notify::{Notifier, TracingNotifier};
pub use session::{SessionState, TranslatorSession};
