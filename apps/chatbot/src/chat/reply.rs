use tracing::{debug, info};

use crate::chat::prompts::chat_prompt;
use crate::errors::AppError;
use crate::knowledge::KnowledgeText;
use crate::llm_client::TextGenerator;

pub const NO_MESSAGE: &str = "No message provided";

/// One chat turn: validate, build the prompt, call the model once.
///
/// An empty message never reaches the generator. Upstream failures come back
/// as `AppError::Generation`, whose response body carries no upstream detail.
pub async fn generate_reply(
    knowledge: &KnowledgeText,
    generator: &dyn TextGenerator,
    message: &str,
) -> Result<String, AppError> {
    if message.is_empty() {
        return Err(AppError::Validation(NO_MESSAGE.to_string()));
    }

    let prompt = chat_prompt(knowledge.as_str(), message);
    debug!("Chat prompt assembled: {} bytes", prompt.len());

    let reply = generator.generate(&prompt).await?;
    info!("Chat reply generated: {} bytes", reply.len());
    Ok(reply)
}
