use cloner_core::{update, AppState, Effect, GeneratedProject, Msg, Screen, Stage};
use pretty_assertions::assert_eq;

fn ready_with(project: GeneratedProject) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::UrlInputChanged("https://example.com".to_string()),
    );
    let (state, _) = update(state, Msg::CloneSubmitted);
    let (state, _) = update(state, Msg::PipelineProgress { run_id: 1, stage: Stage::Analyzing });
    let (state, _) = update(state, Msg::PipelineProgress { run_id: 1, stage: Stage::Generating });
    let (state, _) = update(state, Msg::CloneSucceeded { run_id: 1, project });
    state
}

fn two_file_project() -> GeneratedProject {
    GeneratedProject::from_entries([
        ("components/Header.tsx", "header"),
        ("app/page.tsx", "page"),
    ])
}

#[test]
fn default_selection_is_first_file_of_the_response() {
    let state = ready_with(two_file_project());
    // Not the lexicographically first path: the first one the generator sent.
    assert_eq!(state.session().selected_file(), Some("components/Header.tsx"));

    let view = state.view();
    assert_eq!(view.screen, Screen::Workspace);
    assert_eq!(view.file_count, Some(2));
    let editor = view.editor.expect("editor view");
    assert_eq!(editor.path, "components/Header.tsx");
    assert_eq!(editor.content, "header");
}

#[test]
fn selecting_a_known_file_changes_only_the_selection() {
    let state = ready_with(two_file_project());
    let files_before = state.session().project().unwrap().files().clone();

    let (mut state, effects) = update(state, Msg::FileSelected("app/page.tsx".to_string()));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.session().selected_file(), Some("app/page.tsx"));
    assert_eq!(state.session().project().unwrap().files(), &files_before);

    let selected: Vec<_> = state
        .view()
        .sidebar
        .iter()
        .filter(|entry| entry.selected)
        .map(|entry| entry.path.clone())
        .collect();
    assert_eq!(selected, vec!["app/page.tsx".to_string()]);
}

#[test]
fn selecting_an_unknown_file_is_a_noop() {
    let mut state = ready_with(two_file_project());
    state.consume_dirty();
    let before = state.clone();

    let (mut state, effects) = update(state, Msg::FileSelected("missing.tsx".to_string()));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state, before);
}

#[test]
fn editing_replaces_only_the_selected_entry() {
    let state = ready_with(two_file_project());
    let (state, _) = update(state, Msg::FileSelected("app/page.tsx".to_string()));
    let (state, effects) = update(
        state,
        Msg::FileEdited {
            path: "app/page.tsx".to_string(),
            content: "page v2".to_string(),
        },
    );

    assert!(effects.is_empty());
    let project = state.session().project().unwrap();
    assert_eq!(project.content("app/page.tsx"), Some("page v2"));
    assert_eq!(project.content("components/Header.tsx"), Some("header"));
    assert_eq!(project.len(), 2);
}

#[test]
fn edit_built_for_a_replaced_file_does_not_leak_into_new_project() {
    let state = ready_with(GeneratedProject::from_entries([("old.tsx", "old")]));
    let (state, _) = update(state, Msg::CloneSubmitted);
    let (state, _) = update(state, Msg::PipelineProgress { run_id: 2, stage: Stage::Analyzing });
    let (state, _) = update(state, Msg::PipelineProgress { run_id: 2, stage: Stage::Generating });
    let (state, _) = update(
        state,
        Msg::CloneSucceeded {
            run_id: 2,
            project: GeneratedProject::from_entries([("app/page.tsx", "NEW"), ("b.tsx", "b")]),
        },
    );
    let (mut state, effects) = update(
        state,
        Msg::FileEdited {
            path: "old.tsx".to_string(),
            content: "oldX".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty(), "project replacement is still pending a redraw");
    let project = state.session().project().unwrap();
    assert_eq!(project.content("app/page.tsx"), Some("NEW"));
    assert_eq!(project.content("b.tsx"), Some("b"));
    assert!(!project.contains("old.tsx"));
}

#[test]
fn edit_for_unselected_file_is_ignored() {
    let mut state = ready_with(two_file_project());
    state.consume_dirty();
    let before = state.clone();

    let (mut state, _) = update(
        state,
        Msg::FileEdited {
            path: "app/page.tsx".to_string(),
            content: "sneaky".to_string(),
        },
    );
    assert!(!state.consume_dirty());
    assert_eq!(state, before);
}

#[test]
fn editing_without_project_is_ignored() {
    let (mut state, effects) = update(
        AppState::new(),
        Msg::FileEdited {
            path: "a.tsx".to_string(),
            content: "text".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert!(state.session().project().is_none());
}

#[test]
fn new_run_replaces_project_wholesale() {
    let state = ready_with(two_file_project());
    let (state, _) = update(state, Msg::CloneSubmitted);
    let (state, _) = update(state, Msg::PipelineProgress { run_id: 2, stage: Stage::Analyzing });
    let (state, _) = update(state, Msg::PipelineProgress { run_id: 2, stage: Stage::Generating });
    let (state, _) = update(
        state,
        Msg::CloneSucceeded {
            run_id: 2,
            project: GeneratedProject::from_entries([("app/layout.tsx", "layout")]),
        },
    );

    let project = state.session().project().unwrap();
    assert_eq!(project.len(), 1);
    assert!(!project.contains("app/page.tsx"));
    assert_eq!(state.session().selected_file(), Some("app/layout.tsx"));
}

#[test]
fn export_emits_effect_with_current_files() {
    let state = ready_with(GeneratedProject::from_entries([("a.tsx", "x")]));
    let (state, _) = update(
        state,
        Msg::FileEdited {
            path: "a.tsx".to_string(),
            content: "y".to_string(),
        },
    );
    let (_state, effects) = update(state, Msg::ExportClicked);

    assert_eq!(
        effects,
        vec![Effect::ExportProject {
            project: GeneratedProject::from_entries([("a.tsx", "y")]),
        }]
    );
}

#[test]
fn export_without_project_is_a_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::ExportClicked);
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn export_outcome_is_reported_as_notice() {
    let (state, _) = update(
        AppState::new(),
        Msg::ExportFinished(Ok("/tmp/reconstructed-project.json".to_string())),
    );
    assert_eq!(
        state.view().notice.as_deref(),
        Some("Exported to /tmp/reconstructed-project.json")
    );

    let (state, _) = update(state, Msg::ExportFinished(Err("disk full".to_string())));
    assert_eq!(state.view().notice.as_deref(), Some("Export failed: disk full"));
    assert_eq!(state.view().error_message, None);
}

#[test]
fn copy_emits_selected_file_content() {
    let state = ready_with(two_file_project());
    let (state, _) = update(state, Msg::FileSelected("app/page.tsx".to_string()));
    let (state, _) = update(
        state,
        Msg::FileEdited {
            path: "app/page.tsx".to_string(),
            content: "page v2".to_string(),
        },
    );
    let (_state, effects) = update(state, Msg::CopyClicked);

    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            path: "app/page.tsx".to_string(),
            content: "page v2".to_string(),
        }]
    );
}

#[test]
fn copy_without_selection_is_a_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::CopyClicked);
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn copy_outcome_is_reported_as_notice() {
    let (state, _) = update(
        AppState::new(),
        Msg::CopyFinished(Ok("app/page.tsx".to_string())),
    );
    assert_eq!(
        state.view().notice.as_deref(),
        Some("Copied app/page.tsx to clipboard")
    );

    let (state, _) = update(state, Msg::CopyFinished(Err("no display".to_string())));
    assert_eq!(state.view().notice.as_deref(), Some("Copy failed: no display"));
}

#[test]
fn busy_view_shows_loading_preview_and_disabled_submit() {
    let (state, _) = update(
        AppState::new(),
        Msg::UrlInputChanged("https://example.com".to_string()),
    );
    let (state, _) = update(state, Msg::CloneSubmitted);

    let view = state.view();
    assert_eq!(view.screen, Screen::Workspace);
    assert!(view.preview.loading);
    assert_eq!(view.preview.address, "https://example.com");
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label, "Processing...");
    assert!(view.editor.is_none());
}

#[test]
fn preview_address_tracks_input_after_a_run() {
    let state = ready_with(two_file_project());
    let (mut state, _) = update(state, Msg::UrlInputChanged("https://next.example.com".to_string()));
    assert!(state.consume_dirty());
    assert_eq!(state.session().url(), "https://example.com");
    assert_eq!(state.view().preview.address, "https://next.example.com");
}

#[test]
fn idle_screen_depends_on_whether_a_project_survived() {
    let state = ready_with(two_file_project());
    let (state, _) = update(state, Msg::CloneSubmitted);
    let (state, _) = update(state, Msg::CancelClicked);
    let view = state.view();
    assert_eq!(view.screen, Screen::Workspace);
    assert!(!view.preview.loading);
    assert_eq!(view.file_count, Some(2));

    let (state, _) = update(state, Msg::CloneSubmitted);
    let (state, _) = update(state, Msg::CloneFailed { run_id: 3, message: "boom".to_string() });
    assert_eq!(state.view().screen, Screen::Failure);
    let (state, _) = update(state, Msg::ErrorAcknowledged);
    assert_eq!(state.view().screen, Screen::Landing);
}
