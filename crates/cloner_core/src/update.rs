use crate::{AppState, Effect, Msg};

/// Shown when a run fails without any message of its own.
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "An unexpected error occurred during cloning.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlInputChanged(input) => {
            state.set_url_input(input);
            Vec::new()
        }
        Msg::CloneSubmitted => {
            // Empty or malformed input is dropped without any feedback, like
            // a browser refusing to submit an invalid url field.
            let Some(url) = parse_submission(state.url_input()) else {
                return (state, Vec::new());
            };
            if !state.session_mut().begin(url.clone()) {
                return (state, Vec::new());
            }
            let run_id = state.allocate_run();
            state.mark_dirty();
            vec![Effect::StartClone { run_id, url }]
        }
        Msg::PipelineProgress { run_id, stage } => {
            if state.is_active_run(run_id) && state.session_mut().advance(stage) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CloneSucceeded { run_id, project } => {
            if state.is_active_run(run_id) && state.session_mut().complete(project) {
                state.clear_active_run();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CloneFailed { run_id, message } => {
            let message = if message.trim().is_empty() {
                UNEXPECTED_FAILURE_MESSAGE.to_string()
            } else {
                message
            };
            if state.is_active_run(run_id) && state.session_mut().fail(message) {
                state.clear_active_run();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CancelClicked => {
            if state.session_mut().cancel() {
                state.mark_dirty();
                state
                    .clear_active_run()
                    .map(|run_id| vec![Effect::CancelClone { run_id }])
                    .unwrap_or_default()
            } else {
                Vec::new()
            }
        }
        Msg::ErrorAcknowledged => {
            if state.session_mut().acknowledge_error() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FileSelected(path) => {
            if state.session_mut().select_file(&path) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FileEdited { path, content } => {
            if state.session_mut().edit_selected(&path, content) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ExportClicked => match state.session().project() {
            Some(project) => vec![Effect::ExportProject {
                project: project.clone(),
            }],
            None => Vec::new(),
        },
        Msg::ExportFinished(result) => {
            let notice = match result {
                Ok(path) => format!("Exported to {path}"),
                Err(message) => format!("Export failed: {message}"),
            };
            state.set_notice(Some(notice));
            Vec::new()
        }
        Msg::CopyClicked => {
            let session = state.session();
            session
                .selected_file()
                .and_then(|path| {
                    let content = session.project()?.content(path)?;
                    Some(vec![Effect::CopyToClipboard {
                        path: path.to_string(),
                        content: content.to_string(),
                    }])
                })
                .unwrap_or_default()
        }
        Msg::CopyFinished(result) => {
            let notice = match result {
                Ok(path) => format!("Copied {path} to clipboard"),
                Err(message) => format!("Copy failed: {message}"),
            };
            state.set_notice(Some(notice));
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

fn parse_submission(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    url::Url::parse(trimmed).ok()?;
    Some(trimmed.to_string())
}
