use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::{compile, KnowledgeText, ProjectDocument};

/// Reads both inputs and compiles the knowledge text.
///
/// A missing background document is fatal. Missing or malformed project data
/// is logged and replaced with an empty document.
pub async fn load_knowledge(
    knowledge_base_path: &Path,
    project_data_path: &Path,
) -> Result<KnowledgeText> {
    let static_text = read_static_text(knowledge_base_path).await?;
    let project_data = read_project_data(project_data_path).await;

    let knowledge = compile(&static_text, &project_data);
    info!(
        "Knowledge base compiled: {} bytes (projects={}, results={}, extractions={}, smeltings={})",
        knowledge.len(),
        project_data.count("projects"),
        project_data.count("results"),
        project_data.count("extractions"),
        project_data.count("smeltings"),
    );
    Ok(knowledge)
}

async fn read_static_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read knowledge base at {}", path.display()))
}

async fn read_project_data(path: &Path) -> ProjectDocument {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::NotFound {
                warn!("Project data not found at {}, using empty data", path.display());
            } else {
                warn!("Failed to read project data at {}: {e}, using empty data", path.display());
            }
            return ProjectDocument::empty();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => {
            info!("Loaded project data from {}", path.display());
            ProjectDocument::new(value)
        }
        Err(e) => {
            warn!("Project data at {} is not valid JSON: {e}, using empty data", path.display());
            ProjectDocument::empty()
        }
    }
}
