pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeFile;

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let landing_page = ServeFile::new(&state.landing_page_path);

    Router::new()
        .route_service("/", landing_page)
        .route("/health", get(health::health_handler))
        .route("/chat", post(handlers::handle_chat))
        .with_state(state)
}
