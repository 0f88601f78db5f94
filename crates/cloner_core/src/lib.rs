//! Cloner core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod project;
mod session;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use project::GeneratedProject;
pub use session::Session;
pub use state::{AppState, PipelineState, RunId, Stage};
pub use update::{update, UNEXPECTED_FAILURE_MESSAGE};
pub use view_model::{
    sidebar_entries, AppViewModel, EditorView, PreviewView, Screen, SidebarEntry,
    PREVIEW_PLACEHOLDER_ADDRESS,
};
