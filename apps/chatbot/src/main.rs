mod chat;
mod config;
mod errors;
mod knowledge;
mod llm_client;
mod routes;
mod state;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::knowledge::load_knowledge;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting LCA chatbot v{}", env!("CARGO_PKG_VERSION"));

    // Compile the knowledge base before anything can be served
    let knowledge = load_knowledge(&config.knowledge_base_path, &config.project_data_path).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_timeout)?;
    match config.gemini_timeout {
        Some(timeout) => info!(
            "LLM client initialized (model: {}, timeout: {}s)",
            llm_client::MODEL,
            timeout.as_secs()
        ),
        None => info!("LLM client initialized (model: {}, no timeout)", llm_client::MODEL),
    }

    // Build app state
    let state = AppState {
        knowledge,
        generator: Arc::new(llm),
        landing_page_path: config.landing_page_path.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
