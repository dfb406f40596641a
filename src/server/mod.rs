pub mod handlers;
pub mod types;

use crate::gateway::GatewayClient;
use crate::translator::Translator;
use crate::{Result, config::Config};
use axum::http::{HeaderName, header};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Permissive cross-origin policy carried by every response, preflight
/// included.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

pub fn app(config: &Config) -> Router {
    let client = Arc::new(GatewayClient::new(&config.gateway));
    let translator = Translator::new(config.gateway.model.clone(), client);

    let app_state = handlers::AppState {
        translator: Arc::new(translator),
    };

    Router::new()
        .route("/translate", post(handlers::translate))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let app = app(&config);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
