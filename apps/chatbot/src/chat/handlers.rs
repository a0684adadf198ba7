use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::chat::reply::{generate_reply, NO_MESSAGE};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// POST /chat
///
/// The body must be a JSON object. Anything else is answered like a missing message.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Rejected chat request body: {}", rejection.body_text());
            return Err(AppError::Validation(NO_MESSAGE.to_string()));
        }
    };

    let message = message_text(body.get("message"));
    let reply = generate_reply(&state.knowledge, state.generator.as_ref(), &message).await?;
    Ok(Json(ChatReply { reply }))
}

/// Strings pass through; scalars are rendered as text; null and empty
/// containers count as no message.
fn message_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) if items.is_empty() => String::new(),
        Some(Value::Object(fields)) if fields.is_empty() => String::new(),
        Some(other) => other.to_string(),
    }
}
