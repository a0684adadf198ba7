use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and knowledge size.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "lca-chatbot",
        "knowledge_loaded": !state.knowledge.is_empty(),
        "knowledge_bytes": state.knowledge.len()
    }))
}
