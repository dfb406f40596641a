use super::types::{ErrorResponse, TranslationRequest, TranslationResponse};
use crate::Error;
use crate::translator::{AUTO_SENTINEL, Translator};
use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
}

pub async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslationResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Body parsing is done by hand so that a malformed body becomes a JSON
    // error answer rather than an axum rejection.
    let request: TranslationRequest = serde_json::from_slice(&body).map_err(|e| {
        error!("Invalid request body: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let text = request.text.as_deref().unwrap_or("");
    let target_lang = request.target_lang.as_deref().unwrap_or("");
    if text.is_empty() || target_lang.is_empty() {
        let e = Error::validation("Missing text or target language");
        return Err((
            e.status(),
            Json(ErrorResponse {
                error: e.public_message(),
            }),
        ));
    }
    let source_lang = request.source_lang.as_deref().unwrap_or(AUTO_SENTINEL);

    info!(
        "Received translation request from {} to {}",
        source_lang, target_lang
    );

    match state.translator.translate(text, source_lang, target_lang).await {
        Ok(translated_text) => Ok(Json(TranslationResponse { translated_text })),
        Err(e) => {
            error!("Translation request failed: {}", e);
            Err((
                e.status(),
                Json(ErrorResponse {
                    error: e.public_message(),
                }),
            ))
        }
    }
}
