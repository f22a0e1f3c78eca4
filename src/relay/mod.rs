//! HTTP relay for the companion chat.
//!
//! Endpoints:
//! - GET /status - liveness and configured model
//! - POST /chat  - classify, compose, forward upstream, stream the reply

mod error;
mod handlers;
mod types;

pub use error::RelayError;
pub use handlers::{CRISIS_HEADER, EMOTION_HEADER};
pub use types::ChatRequest;

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use crate::classifier::KeywordTable;
use crate::config::ElaraConfig;
use crate::gateway::GatewayClient;

/// Crate version advertised on every response.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared request context. Cloned per request; the gateway client is shared.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<GatewayClient>,
    pub keywords: KeywordTable,
    pub model: String,
}

/// Create the router with all endpoints. Callers are browser apps, so CORS
/// stays permissive.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let version_header = SetResponseHeaderLayer::if_not_present(
        header::HeaderName::from_static("x-elara-version"),
        HeaderValue::from_static(VERSION),
    );

    Router::new()
        .route("/status", get(handlers::status_handler))
        .route("/chat", post(handlers::chat_handler))
        .layer(version_header)
        .layer(cors)
        .with_state(state)
}

/// Build state from configuration and serve until shutdown.
pub async fn run(config: ElaraConfig) -> Result<()> {
    let gateway = GatewayClient::from_config(&config)?;
    info!("Gateway endpoint: {}", gateway.endpoint());

    let state = AppState {
        gateway: Arc::new(gateway),
        keywords: KeywordTable::builtin(),
        model: config.model.clone(),
    };

    let app = create_router(state);
    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Relay listening on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
