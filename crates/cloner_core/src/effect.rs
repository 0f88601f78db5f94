use crate::{GeneratedProject, RunId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartClone { run_id: RunId, url: String },
    CancelClone { run_id: RunId },
    ExportProject { project: GeneratedProject },
    CopyToClipboard { path: String, content: String },
}
