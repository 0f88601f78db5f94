use std::path::{Path, PathBuf};

use cloner_core::GeneratedProject;
use cloner_logging::cloner_info;

use crate::persist::{write_atomic, PersistError};

/// Name of the downloadable project artifact.
pub const EXPORT_FILENAME: &str = "reconstructed-project.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub file_count: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("could not serialize project: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// The export document: the path -> content mapping as pretty-printed JSON.
pub fn render_export(project: &GeneratedProject) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(project.files())?)
}

/// Writes [`EXPORT_FILENAME`] into `dir`, replacing any previous export.
pub fn export_project(dir: &Path, project: &GeneratedProject) -> Result<ExportSummary, ExportError> {
    let document = render_export(project)?;
    let output_path = write_atomic(dir, EXPORT_FILENAME, document.as_bytes())?;
    cloner_info!(
        "Exported {} file(s) to {}",
        project.len(),
        output_path.display()
    );
    Ok(ExportSummary {
        file_count: project.len(),
        output_path,
    })
}
