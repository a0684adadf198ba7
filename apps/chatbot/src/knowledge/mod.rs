// Knowledge base: background document + project data, compiled once at startup.
// The compiled text is immutable and shared read-only by every chat request.

pub mod compiler;
pub mod document;
pub mod loader;

use std::fmt;
use std::sync::Arc;

pub use compiler::compile;
pub use document::ProjectDocument;
pub use loader::load_knowledge;

/// The compiled knowledge text. Cloning shares the same allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeText(Arc<str>);

impl KnowledgeText {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}


impl fmt::Display for KnowledgeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
