// Chat: one stateless model call per request, grounded in the compiled knowledge text.
// All model calls go through llm_client::TextGenerator.

pub mod handlers;
pub mod prompts;
pub mod reply;
