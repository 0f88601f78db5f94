#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input field.
    UrlInputChanged(String),
    /// User submitted the URL form.
    CloneSubmitted,
    /// Engine entered a stage of the given run.
    PipelineProgress {
        run_id: crate::RunId,
        stage: crate::Stage,
    },
    /// Engine produced a project for the given run.
    CloneSucceeded {
        run_id: crate::RunId,
        project: crate::GeneratedProject,
    },
    /// Engine gave up on the given run.
    CloneFailed {
        run_id: crate::RunId,
        message: String,
    },
    /// User aborted the run in flight.
    CancelClicked,
    /// User dismissed the error panel ("Try Again").
    ErrorAcknowledged,
    /// User picked a file in the sidebar.
    FileSelected(String),
    /// User changed the text of `path`; carries the full new text. Ignored
    /// unless `path` is still the selected file.
    FileEdited { path: String, content: String },
    /// User asked for the project download.
    ExportClicked,
    /// Export finished: written path, or a description of what went wrong.
    ExportFinished(Result<String, String>),
    /// User asked to copy the selected file to the clipboard.
    CopyClicked,
    /// Clipboard write finished: copied path, or why it failed.
    CopyFinished(Result<String, String>),
    /// Idle poll of the UI loop.
    Tick,
}
