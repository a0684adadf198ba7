//! Test doubles shared by handler and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::knowledge::KnowledgeText;
use crate::llm_client::{LlmError, TextGenerator};
use crate::state::AppState;

/// Records every prompt and answers with a fixed reply or a fixed failure.
pub struct StubGenerator {
    outcome: Result<String, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        Self::with_outcome(Ok(text.to_string()))
    }

    pub fn failing(detail: &str) -> Self {
        Self::with_outcome(Err(detail.to_string()))
    }

    fn with_outcome(outcome: Result<String, String>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.outcome.clone().map_err(|message| LlmError::Api {
            status: 503,
            message,
        })
    }
}

pub fn test_state(generator: Arc<StubGenerator>, landing_page_path: &std::path::Path) -> AppState {
    AppState {
        knowledge: KnowledgeText::new("Background.\n\n\n--- PROJECT DATA ---\n"),
        generator,
        landing_page_path: landing_page_path.to_path_buf(),
    }
}
