use crate::{GeneratedProject, PipelineState, Stage};

/// One user's cloning session: the URL being cloned, where the pipeline is,
/// and the project currently on display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    url: String,
    pipeline: PipelineState,
    project: Option<GeneratedProject>,
    selected_file: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn pipeline(&self) -> &PipelineState {
        &self.pipeline
    }

    pub fn project(&self) -> Option<&GeneratedProject> {
        self.project.as_ref()
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    /// Message of the failed run; only present in the `Error` state.
    pub fn last_error(&self) -> Option<&str> {
        match &self.pipeline {
            PipelineState::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Starts a run for `url`. Refused while another run is in flight.
    pub(crate) fn begin(&mut self, url: String) -> bool {
        if !self.pipeline.accepts_submission() {
            return false;
        }
        self.url = url;
        self.pipeline = PipelineState::Scraping;
        true
    }

    /// Moves to `stage` if it directly follows the current stage.
    /// Repeating the current stage is not a change.
    pub(crate) fn advance(&mut self, stage: Stage) -> bool {
        let Some(current) = self.pipeline.stage() else {
            return false;
        };
        if current.next() != Some(stage) {
            return false;
        }
        self.pipeline = PipelineState::from(stage);
        true
    }

    /// Installs a freshly generated project and selects its primary file.
    pub(crate) fn complete(&mut self, project: GeneratedProject) -> bool {
        if self.pipeline != PipelineState::Generating {
            return false;
        }
        self.selected_file = project.primary_path().map(ToOwned::to_owned);
        self.project = Some(project);
        self.pipeline = PipelineState::Ready;
        true
    }

    /// Ends the in-flight run with an error. The previous project survives.
    pub(crate) fn fail(&mut self, message: String) -> bool {
        if !self.pipeline.is_busy() {
            return false;
        }
        self.pipeline = PipelineState::Error { message };
        true
    }

    /// Abandons the in-flight run and returns to `Idle`.
    pub(crate) fn cancel(&mut self) -> bool {
        if !self.pipeline.is_busy() {
            return false;
        }
        self.pipeline = PipelineState::Idle;
        true
    }

    /// User acknowledged the error: back to `Idle` with an empty workspace.
    pub(crate) fn acknowledge_error(&mut self) -> bool {
        if !matches!(self.pipeline, PipelineState::Error { .. }) {
            return false;
        }
        self.pipeline = PipelineState::Idle;
        self.project = None;
        self.selected_file = None;
        true
    }

    pub(crate) fn select_file(&mut self, path: &str) -> bool {
        let known = self
            .project
            .as_ref()
            .is_some_and(|project| project.contains(path));
        if !known || self.selected_file.as_deref() == Some(path) {
            return false;
        }
        self.selected_file = Some(path.to_owned());
        true
    }

    /// Replaces the content of `path` when it is the current selection.
    pub(crate) fn edit_selected(&mut self, path: &str, content: String) -> bool {
        let Some(project) = self.project.as_mut() else {
            return false;
        };
        if self.selected_file.as_deref() != Some(path) {
            return false;
        }
        if project.content(path) == Some(content.as_str()) {
            return false;
        }
        project.replace_content(path, content)
    }
}
