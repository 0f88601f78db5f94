use crate::{GeneratedProject, PipelineState, Session};

/// Address shown in the preview bar before any URL was submitted.
pub const PREVIEW_PLACEHOLDER_ADDRESS: &str = "https://your-target-site.com";

/// Which top-level screen the UI should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Nothing cloned yet: headline and feature cards.
    Landing,
    /// Sidebar, editor and preview.
    Workspace,
    /// The last run failed; waiting for the user to acknowledge.
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub screen: Screen,
    pub pipeline: PipelineState,
    pub url_input: String,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub sidebar: Vec<SidebarEntry>,
    pub editor: Option<EditorView>,
    pub preview: PreviewView,
    pub file_count: Option<usize>,
    pub export_enabled: bool,
    pub error_message: Option<String>,
    pub notice: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub path: String,
    /// Last path segment.
    pub name: String,
    /// Number of directories above the file.
    pub depth: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub address: String,
    pub loading: bool,
}

impl AppViewModel {
    pub(crate) fn build(
        session: &Session,
        url_input: &str,
        notice: Option<&str>,
        dirty: bool,
    ) -> Self {
        let pipeline = session.pipeline().clone();
        let project = session.project();
        let screen = match pipeline {
            PipelineState::Idle if project.is_none() => Screen::Landing,
            PipelineState::Error { .. } => Screen::Failure,
            _ => Screen::Workspace,
        };
        let selected = session.selected_file();

        let editor = match (project, selected) {
            (Some(project), Some(path)) => project.content(path).map(|content| EditorView {
                path: path.to_string(),
                content: content.to_string(),
            }),
            _ => None,
        };

        // The address bar mirrors whatever is typed, submitted or not.
        let typed = url_input.trim();
        let address = if typed.is_empty() {
            PREVIEW_PLACEHOLDER_ADDRESS.to_string()
        } else {
            typed.to_string()
        };

        Self {
            screen,
            submit_enabled: pipeline.accepts_submission(),
            submit_label: pipeline.submit_label(),
            url_input: url_input.to_string(),
            sidebar: project
                .map(|project| sidebar_entries(project, selected))
                .unwrap_or_default(),
            editor,
            preview: PreviewView {
                address,
                loading: pipeline.is_busy(),
            },
            file_count: project.map(GeneratedProject::len),
            export_enabled: project.is_some(),
            error_message: session.last_error().map(ToOwned::to_owned),
            notice: notice.map(ToOwned::to_owned),
            pipeline,
            dirty,
        }
    }
}

/// Sidebar rows for `project`, sorted lexicographically by path.
pub fn sidebar_entries(project: &GeneratedProject, selected: Option<&str>) -> Vec<SidebarEntry> {
    // BTreeMap keys are already in lexicographic order.
    project
        .files()
        .keys()
        .map(|path| {
            let name = path.rsplit('/').next().unwrap_or(path).to_string();
            SidebarEntry {
                depth: path.split('/').count() - 1,
                name: if name.is_empty() { path.clone() } else { name },
                selected: selected == Some(path.as_str()),
                path: path.clone(),
            }
        })
        .collect()
}
