//! The structured-output contract between the generator and the rest of the
//! system. Anything the model returns passes through [`parse_project`].

use cloner_core::GeneratedProject;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("response is not valid JSON for the project schema: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ProjectPayload {
    files: Vec<FileEntry>,
}

#[derive(Debug, Deserialize)]
struct FileEntry {
    path: String,
    content: String,
}

/// Parses the model's JSON answer into a project.
///
/// The answer must be an object with a `files` array whose elements carry
/// string `path` and `content` fields. Duplicate paths: last one wins.
pub fn parse_project(text: &str) -> Result<GeneratedProject, SchemaError> {
    let payload: ProjectPayload = serde_json::from_str(text)?;
    Ok(GeneratedProject::from_entries(
        payload
            .files
            .into_iter()
            .map(|entry| (entry.path, entry.content)),
    ))
}

/// Response schema handed to the model with every request.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "files": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "path": {
                            "type": "STRING",
                            "description": "The full path of the file including directory."
                        },
                        "content": {
                            "type": "STRING",
                            "description": "The source code content of the file."
                        }
                    },
                    "required": ["path", "content"]
                }
            }
        },
        "required": ["files"]
    })
}
